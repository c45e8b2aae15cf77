use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureCheck {
    pub ok: bool,
    pub errors: Vec<String>,
    pub headers: Vec<String>,
    pub row_count: usize,
}

impl StructureCheck {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            errors: vec![error.into()],
            headers: Vec::new(),
            row_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    pub expected_count: usize,
    pub found_count: usize,
    pub matched_count: usize,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub coverage_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageCheck {
    pub fully_covered: bool,
    pub metrics: Option<CoverageMetrics>,
    pub error: Option<String>,
}

impl CoverageCheck {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            fully_covered: false,
            metrics: None,
            error: Some(error.into()),
        }
    }

    pub fn percentage(&self) -> f64 {
        self.metrics
            .as_ref()
            .map(|metrics| metrics.coverage_percentage)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub check_id: String,
    pub name: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySummary {
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub source_path: String,
    pub min_records: usize,
    pub source_exists: bool,
    pub structure: StructureCheck,
    pub counts: RecordCounts,
    pub coverage: CoverageCheck,
    pub checks: Vec<QualityCheck>,
    pub summary: QualitySummary,
    pub overall_pass: bool,
    pub report: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReportManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_sha256: Option<String>,
    pub taxonomy_category_count: usize,
    pub taxonomy_name_count: usize,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub category_count: usize,
    pub name_count: usize,
    pub categories: BTreeMap<String, Vec<String>>,
}
