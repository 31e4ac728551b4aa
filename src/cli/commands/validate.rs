//! `validate` command: flatten and check rows without writing output

use crate::config::ConfigLoader;
use crate::core::agenda::invalid_rows;
use crate::generate::{build_rows, render_options, GenerateOptions};
use anyhow::Result;
use std::path::Path;

/// Report rows that would be missing required fields in the agenda sheet
pub fn run_validate_command(config_path: &Path) -> Result<()> {
    let config = ConfigLoader::new(config_path).load()?;
    let rows = build_rows(&config, render_options(&config, &GenerateOptions::default()))?;
    let invalid = invalid_rows(&rows, config.first_data_row);

    if invalid.is_empty() {
        println!("✅ All {} row(s) have the required fields", rows.len());
    } else {
        println!(
            "⚠️  {} of {} row(s) are missing required fields: {:?}",
            invalid.len(),
            rows.len(),
            invalid
        );
    }

    Ok(())
}
