//! `generate` command: the full agenda pipeline

use crate::config::ConfigLoader;
use crate::generate::{run_generate, GenerateOptions};
use anyhow::Result;
use std::path::Path;

/// Generate all output tables for the given configuration
pub fn run_generate_command(config_path: &Path, options: &GenerateOptions) -> Result<()> {
    let config = ConfigLoader::new(config_path).load()?;
    let report = run_generate(&config, options)?;

    println!(
        "Wrote {} agenda row(s) to {}",
        report.rows,
        options.agenda_out.display()
    );
    println!(
        "Wrote {} speaker(s) to {} and {} non-speaker(s) to {}",
        report.speakers,
        options.speakers_out.display(),
        report.non_speakers,
        options.non_speakers_out.display()
    );
    if !report.invalid_rows.is_empty() {
        println!(
            "⚠️  {} row(s) are missing required fields: {:?}",
            report.invalid_rows.len(),
            report.invalid_rows
        );
    }

    Ok(())
}
