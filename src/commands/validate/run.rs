use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::bail;

use super::*;
use crate::cli::ValidateArgs;
use crate::model::ValidationReportManifest;
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

const REPORT_MANIFEST_VERSION: u32 = 1;

pub fn run(args: ValidateArgs) -> Result<()> {
    let taxonomy = Taxonomy::load_or_default(args.taxonomy_path.as_deref())?;
    let validator = CoverageValidator::new(&taxonomy, args.min_records);

    info!(
        csv_path = %args.csv_path.display(),
        taxonomy = %args
            .taxonomy_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        categories = taxonomy.category_count(),
        expected_names = taxonomy.name_count(),
        min_records = args.min_records,
        attempts = args.attempts,
        "validation requested"
    );

    let result = run_with_retries(
        &validator,
        &args.csv_path,
        args.attempts,
        Duration::from_millis(args.retry_delay_ms),
    );

    if let Some(report_path) = &args.report_path {
        let manifest = build_report_manifest(&taxonomy, &args.csv_path, result.clone());
        write_json_pretty(report_path, &manifest)?;
        info!(path = %report_path.display(), "wrote validation report");
    }

    if args.json {
        write_json_result(&result)?;
    } else {
        write_text_report(&result)?;
    }

    if !result.overall_pass {
        bail!(
            "validation failed: {} of {} checks failed for {}",
            result.summary.failed,
            result.summary.total_checks,
            result.source_path
        );
    }

    info!(path = %result.source_path, "validation passed");
    Ok(())
}

pub fn run_with_retries(
    validator: &CoverageValidator,
    path: &Path,
    attempts: u32,
    delay: Duration,
) -> ValidationResult {
    retry_until_pass(attempts, delay, || validator.run_all(path))
}

pub fn retry_until_pass<F>(attempts: u32, delay: Duration, mut run_once: F) -> ValidationResult
where
    F: FnMut() -> ValidationResult,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        let result = run_once();
        if result.overall_pass || attempt >= attempts {
            return result;
        }

        warn!(
            attempt,
            attempts,
            failed_checks = result.summary.failed,
            delay_ms = delay.as_millis() as u64,
            "validation attempt failed; retrying"
        );
        thread::sleep(delay);
        attempt += 1;
    }
}

pub fn build_report_manifest(
    taxonomy: &Taxonomy,
    csv_path: &Path,
    result: ValidationResult,
) -> ValidationReportManifest {
    let source_sha256 = if result.source_exists {
        match sha256_file(csv_path) {
            Ok(digest) => Some(digest),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "failed to hash source");
                None
            }
        }
    } else {
        None
    };

    ValidationReportManifest {
        manifest_version: REPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        source_sha256,
        taxonomy_category_count: taxonomy.category_count(),
        taxonomy_name_count: taxonomy.name_count(),
        result,
    }
}

fn write_json_result(result: &ValidationResult) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, result)
        .context("failed to serialize validation json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_report(result: &ValidationResult) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    output.write_all(result.report.as_bytes())?;
    output.flush()?;
    Ok(())
}
