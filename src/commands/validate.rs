use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::model::{
    CoverageCheck, CoverageMetrics, QualityCheck, QualitySummary, RecordCounts, StructureCheck,
    ValidationResult,
};
use crate::taxonomy::Taxonomy;

mod checks;
mod counts;
mod coverage;
mod report;
mod run;
mod source;

use self::checks::*;

pub use self::run::run;

#[derive(Debug, Clone)]
pub struct CoverageValidator {
    expected: BTreeSet<String>,
    min_records: usize,
}

impl CoverageValidator {
    pub fn new(taxonomy: &Taxonomy, min_records: usize) -> Self {
        Self {
            expected: taxonomy.expected_set(),
            min_records,
        }
    }

    pub fn run_all(&self, path: &Path) -> ValidationResult {
        let mut result = ValidationResult {
            source_path: path.display().to_string(),
            min_records: self.min_records,
            ..ValidationResult::default()
        };

        result.source_exists = self.check_source_exists(path);
        result.structure = self.check_structure(path);
        result.counts = self.count_records(path);
        result.coverage = self.check_coverage(path);
        result.checks = build_checks(&result);
        result.summary = summarize_checks(&result.checks);
        result.overall_pass = result.summary.failed == 0;
        result.report = self.build_report(&result);

        info!(
            path = %result.source_path,
            exists = result.source_exists,
            structure_ok = result.structure.ok,
            total = result.counts.total,
            coverage_percentage = result.coverage.percentage(),
            passed = result.summary.passed,
            failed = result.summary.failed,
            "validation run complete"
        );

        result
    }
}
