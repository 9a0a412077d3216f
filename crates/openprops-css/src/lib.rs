//! Stylesheet tooling for the Open Props UI previewer.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! This crate provides:
//! - Extraction of `@layer` / `@import` directives from an entry stylesheet
//! - Flattening of the imported files into one layer-wrapped stylesheet
//! - Theme settings, slider-code mapping and `:root` custom-property rendering

mod directive;
mod error;
mod flatten;
mod options;
mod theme;

pub use directive::{EntrySheet, ImportDirective, parse_entry, strip_nested_imports};
pub use error::{FlattenError, ThemeError};
pub use flatten::{FlattenReport, flatten, render_import_block};
pub use options::{DEFAULT_CSS_DIR, DEFAULT_ENTRY, DEFAULT_OUTPUT_NAME, FlattenOptions};
pub use theme::{
    ColorScheme, RadiusStep, ThemeSettings, ThemeUpdate, TypographyScale, render_root_block,
};
