//! Theme command implementation.
//!
//! Renders the `:root` block for a set of slider values. Values come from an
//! optional TOML file first, then from command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use openprops_css::{ThemeSettings, ThemeUpdate, render_root_block};

/// Arguments for the theme command
#[derive(Debug, Default)]
pub struct ThemeArgs {
    /// TOML file with slider values
    pub config: Option<String>,
    /// Output file; stdout when absent
    pub output: Option<String>,
    /// Slider values given as flags
    pub update: ThemeUpdate,
}

/// Resolve the final settings from defaults, the config file and flags.
fn resolve_settings(args: &ThemeArgs) -> Result<ThemeSettings> {
    let mut settings = ThemeSettings::default();

    if let Some(config) = &args.config {
        debug!("Loading theme values from {}", config);
        let from_file = ThemeUpdate::load(Path::new(config))
            .with_context(|| format!("Failed to load theme config {}", config))?;
        report_rejected(settings.apply_update(&from_file));
    }

    if !args.update.is_empty() {
        report_rejected(settings.apply_update(&args.update));
    }

    Ok(settings)
}

fn report_rejected(rejected: Vec<&'static str>) {
    if !rejected.is_empty() {
        warn!("Kept previous values for: {}", rejected.join(", "));
    }
}

/// Execute the theme command
pub fn execute(args: ThemeArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;
    let css = render_root_block(&settings);

    match &args.output {
        Some(output) => {
            let path = Path::new(output);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, format!("{css}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{css}"),
    }

    Ok(())
}
