use super::*;
use super::source::{NAME_KEYS, load_table, missing_source_message, read_failure_message};

impl CoverageValidator {
    pub fn check_coverage(&self, path: &Path) -> CoverageCheck {
        if !self.check_source_exists(path) {
            return CoverageCheck::failed(missing_source_message(path));
        }

        let table = match load_table(path) {
            Ok(table) => table,
            Err(err) => return CoverageCheck::failed(read_failure_message(&err)),
        };

        let found = table
            .records
            .iter()
            .filter_map(|record| record.first_non_empty(&NAME_KEYS))
            .map(str::to_lowercase)
            .collect::<BTreeSet<String>>();

        let metrics = compute_coverage(&self.expected, &found);
        info!(
            expected = metrics.expected_count,
            found = metrics.found_count,
            missing = metrics.missing.len(),
            extra = metrics.extra.len(),
            coverage_percentage = metrics.coverage_percentage,
            "coverage computed"
        );

        CoverageCheck {
            fully_covered: metrics.missing.is_empty(),
            metrics: Some(metrics),
            error: None,
        }
    }
}

pub fn compute_coverage(expected: &BTreeSet<String>, found: &BTreeSet<String>) -> CoverageMetrics {
    let missing = expected.difference(found).cloned().collect::<Vec<String>>();
    let extra = found.difference(expected).cloned().collect::<Vec<String>>();
    let matched_count = expected.len() - missing.len();

    let coverage_percentage = if expected.is_empty() {
        100.0
    } else {
        matched_count as f64 / expected.len() as f64 * 100.0
    };

    CoverageMetrics {
        expected_count: expected.len(),
        found_count: found.len(),
        matched_count,
        missing,
        extra,
        coverage_percentage,
    }
}
