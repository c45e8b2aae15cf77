use super::*;

const FULL_COVERAGE_PERCENTAGE: f64 = 100.0;

pub fn build_checks(result: &ValidationResult) -> Vec<QualityCheck> {
    vec![
        QualityCheck {
            check_id: "V-001".to_string(),
            name: "Source file exists".to_string(),
            result: evaluate_flag(result.source_exists).to_string(),
        },
        QualityCheck {
            check_id: "V-002".to_string(),
            name: "Structure is valid".to_string(),
            result: evaluate_flag(result.structure.ok).to_string(),
        },
        QualityCheck {
            check_id: "V-003".to_string(),
            name: "Minimum record count".to_string(),
            result: evaluate_min_threshold(result.counts.total as f64, result.min_records as f64)
                .to_string(),
        },
        QualityCheck {
            check_id: "V-004".to_string(),
            name: "Taxonomy fully covered".to_string(),
            result: evaluate_min_threshold(
                result.coverage.percentage(),
                FULL_COVERAGE_PERCENTAGE,
            )
            .to_string(),
        },
    ]
}

pub fn evaluate_flag(ok: bool) -> &'static str {
    if ok { "pass" } else { "failed" }
}

pub fn evaluate_min_threshold(value: f64, min_allowed: f64) -> &'static str {
    evaluate_flag(value >= min_allowed)
}

pub fn summarize_checks(checks: &[QualityCheck]) -> QualitySummary {
    let passed = checks.iter().filter(|check| check.result == "pass").count();
    let failed = checks
        .iter()
        .filter(|check| check.result == "failed")
        .count();

    QualitySummary {
        total_checks: checks.len(),
        passed,
        failed,
    }
}
