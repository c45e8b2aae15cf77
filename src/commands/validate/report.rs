use super::*;

const BANNER_WIDTH: usize = 60;

impl CoverageValidator {
    pub fn build_report(&self, result: &ValidationResult) -> String {
        let rule = "=".repeat(BANNER_WIDTH);
        let mut lines = vec![
            rule.clone(),
            "AGENT LIST VALIDATION REPORT".to_string(),
            rule.clone(),
            format!("Source: {}", result.source_path),
            String::new(),
            format!("1. File existence: {}", verdict_label(result.source_exists)),
            String::new(),
        ];

        lines.extend(structure_section(result));
        lines.push(String::new());
        lines.extend(statistics_section(result));
        lines.push(String::new());
        lines.extend(coverage_section(result));
        lines.push(String::new());

        lines.push(rule.clone());
        lines.push(format!(
            "Checks: {} passed, {} failed",
            result.summary.passed, result.summary.failed
        ));
        lines.extend(
            result
                .checks
                .iter()
                .map(|check| format!("[{}] {} {}", check.result, check.check_id, check.name)),
        );
        lines.push(format!("OVERALL: {}", verdict_label(result.overall_pass)));
        lines.push(rule);

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }
}

fn structure_section(result: &ValidationResult) -> Vec<String> {
    let structure = &result.structure;
    let mut lines = vec![format!(
        "2. Format validity: {}",
        verdict_label(structure.ok)
    )];

    if structure.ok {
        lines.push(format!("   Headers: {}", structure.headers.join(", ")));
        lines.push(format!("   Data rows: {}", structure.row_count));
    } else {
        lines.extend(structure.errors.iter().map(|error| format!("   - {error}")));
    }

    lines
}

fn statistics_section(result: &ValidationResult) -> Vec<String> {
    let counts = &result.counts;
    let mut lines = vec![
        "3. Statistics".to_string(),
        format!("   Total records: {}", counts.total),
        format!(
            "   Minimum required: {} ({})",
            result.min_records,
            verdict_label(counts.total >= result.min_records)
        ),
    ];

    if counts.by_category.is_empty() {
        lines.push("   By category: none".to_string());
    } else {
        lines.push("   By category:".to_string());
        lines.extend(
            counts
                .by_category
                .iter()
                .map(|(category, count)| format!("   - {category}: {count}")),
        );
    }

    lines
}

fn coverage_section(result: &ValidationResult) -> Vec<String> {
    let mut lines = vec!["4. Coverage".to_string()];

    let Some(metrics) = &result.coverage.metrics else {
        let reason = result.coverage.error.as_deref().unwrap_or("unknown error");
        lines.push(format!("   Coverage could not be computed: {reason}"));
        return lines;
    };

    lines.push(format!("   Expected agents: {}", metrics.expected_count));
    lines.push(format!("   Found agents: {}", metrics.found_count));
    lines.push(format!("   Matched agents: {}", metrics.matched_count));
    lines.push(format!(
        "   Coverage: {:.1}%",
        metrics.coverage_percentage
    ));
    lines.extend(name_list("Missing agents", &metrics.missing));
    lines.extend(name_list("Unexpected agents", &metrics.extra));

    lines
}

fn name_list(label: &str, names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec![format!("   {label}: none")];
    }

    let mut sorted = names.iter().collect::<Vec<&String>>();
    sorted.sort();

    let mut lines = vec![format!("   {label} ({}):", sorted.len())];
    lines.extend(sorted.into_iter().map(|name| format!("   - {name}")));
    lines
}

fn verdict_label(ok: bool) -> &'static str {
    if ok { "PASS" } else { "FAIL" }
}
