/*
 * flatten.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Flatten command implementation
 */

//! Flatten command implementation.
//!
//! Combines the stylesheets imported by `main.css` into one file.

use anyhow::{Context, Result};
use tracing::{info, warn};

use openprops_css::{DEFAULT_CSS_DIR, FlattenOptions, flatten};

/// Arguments for the flatten command
#[derive(Debug)]
pub struct FlattenArgs {
    /// CSS directory (default: static/css)
    pub css_dir: Option<String>,
    /// Output file path (default: <css_dir>/flat.css)
    pub output: Option<String>,
    /// Entry stylesheet name
    pub entry: String,
}

impl FlattenArgs {
    fn options(&self) -> FlattenOptions {
        let css_dir = self.css_dir.as_deref().unwrap_or(DEFAULT_CSS_DIR);
        let mut options = FlattenOptions::new(css_dir).with_entry(&self.entry);
        if let Some(output) = &self.output {
            options = options.with_output(output);
        }
        options
    }
}

/// Execute the flatten command
pub fn execute(args: FlattenArgs) -> Result<()> {
    let options = args.options();

    let report = flatten(&options)
        .with_context(|| format!("Failed to flatten {}", options.entry_path().display()))?;

    if !report.missing.is_empty() {
        warn!(
            "Skipped {} missing import(s): {}",
            report.missing.len(),
            report.missing.join(", ")
        );
    }
    if report.duplicates > 0 {
        info!("Skipped {} duplicate import(s)", report.duplicates);
    }

    Ok(())
}
