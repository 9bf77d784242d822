//! Generate command implementation.

use std::path::PathBuf;
use std::time::Duration;

use super::ParamArgs;
use crate::app::api::{self, GenerateOptions, MaterializationOutcome};
use crate::domain::AppError;

pub(super) fn run_generate(
    params: &ParamArgs,
    source: Option<PathBuf>,
    ignore_source_errors: bool,
    source_timeout: u64,
) -> Result<i32, AppError> {
    let options = GenerateOptions { params: params.load()?, source, ignore_source_errors };
    let outcome =
        api::generate_with_timeout(&params.root, options, Duration::from_secs(source_timeout))?;

    if let Some(chars) = outcome.source_chars {
        println!("📄 Read {} characters from source document", chars);
    }
    if let Some(warning) = &outcome.source_warning {
        println!("⚠️  Skipping source document: {}", warning);
    }

    for result in &outcome.report.results {
        let suffix = if result.is_directory { "/" } else { "" };
        match &result.outcome {
            MaterializationOutcome::Failed(reason) => {
                println!("  ✗ {}{}: {}", result.path, suffix, reason)
            }
            other => println!("  ✓ {}{} ({})", result.path, suffix, other),
        }
    }

    let report = &outcome.report;
    if report.is_success() {
        println!(
            "✅ Generated {} lab at {} ({} created, {} overwritten)",
            outcome.environment,
            outcome.root.display(),
            report.created(),
            report.overwritten()
        );
    } else {
        println!(
            "⚠️  Generated {} lab at {} with {} failed entr{}",
            outcome.environment,
            outcome.root.display(),
            report.failed(),
            if report.failed() == 1 { "y" } else { "ies" }
        );
    }
    println!("Fingerprint: {}", outcome.fingerprint);

    Ok(outcome.exit_code())
}
