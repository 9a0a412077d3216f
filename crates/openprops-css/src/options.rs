//! Flattening inputs.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::{Path, PathBuf};

/// Source directory used when none is given.
pub const DEFAULT_CSS_DIR: &str = "static/css";

/// Entry stylesheet name inside the source directory.
pub const DEFAULT_ENTRY: &str = "main.css";

/// Output file name inside the source directory when no output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "flat.css";

/// Where to read stylesheets from and where to write the flattened result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Directory holding the entry stylesheet and everything it imports
    pub css_dir: PathBuf,

    /// Entry stylesheet file name, relative to `css_dir`
    pub entry: String,

    /// Explicit output path; `None` means `<css_dir>/flat.css`
    pub output: Option<PathBuf>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CSS_DIR)
    }
}

impl FlattenOptions {
    pub fn new(css_dir: impl Into<PathBuf>) -> Self {
        Self {
            css_dir: css_dir.into(),
            entry: DEFAULT_ENTRY.to_string(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    /// Path of the entry stylesheet.
    pub fn entry_path(&self) -> PathBuf {
        self.css_dir.join(&self.entry)
    }

    /// Path the flattened stylesheet is written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.css_dir.join(DEFAULT_OUTPUT_NAME))
    }

    /// Resolve an import path against the source directory.
    ///
    /// A leading `./` is dropped before joining; any other form is joined as written.
    pub fn resolve_import(&self, path: &str) -> PathBuf {
        let relative = path.strip_prefix("./").unwrap_or(path);
        self.css_dir.join(Path::new(relative))
    }
}
