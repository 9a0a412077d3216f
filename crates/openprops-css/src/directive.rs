//! Directive extraction from stylesheet text.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! The entry stylesheet drives flattening through two kinds of directive:
//!
//! ```text
//! @layer reset, base, components;
//! @import "./normalize.css" layer(reset);
//! @import "./theme.css";
//! ```
//!
//! Only the first `@layer` statement with a name list is read. Every
//! `@import` is collected in order of appearance. Directives are expected
//! one per line; this is pattern matching, not a CSS parser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a `@layer a, b, c;` statement. Captures the name list in group 1.
static LAYER_DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@layer\s+(.*?);").unwrap());

/// Matches `@import "path" layer(name);`.
///
/// Group 1 is the path, group 2 the optional layer name. Either quote style
/// is accepted around the path.
static IMPORT_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"@import\s+["'](.+?)["'](?:\s+layer\((.*?)\))?;"#).unwrap()
});

/// Matches any import inside an imported file, up to the next `;` on the line.
static NESTED_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@import\s+["'].*?["'].*?;"#).unwrap());

/// One `@import` statement from the entry stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    /// Path exactly as written between the quotes
    pub path: String,

    /// Cascade layer from a `layer(...)` clause, if any
    pub layer: Option<String>,
}

impl ImportDirective {
    pub fn new(path: impl Into<String>, layer: Option<&str>) -> Self {
        Self {
            path: path.into(),
            layer: layer.map(String::from),
        }
    }
}

/// Directives read from an entry stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySheet {
    /// Layer names from the `@layer` declaration, in declared order
    pub layers: Vec<String>,

    /// Import directives in order of appearance
    pub imports: Vec<ImportDirective>,
}

impl EntrySheet {
    /// The single `@layer` line to emit first, or `None` when no layers were declared.
    pub fn layer_declaration(&self) -> Option<String> {
        if self.layers.is_empty() {
            None
        } else {
            Some(format!("@layer {};", self.layers.join(", ")))
        }
    }
}

/// Extract the layer declaration and import list from entry stylesheet text.
///
/// A missing `@layer` statement is not an error; `layers` is simply empty.
/// Names that are blank after trimming are dropped.
///
/// # Example
///
/// ```
/// use openprops_css::parse_entry;
///
/// let sheet = parse_entry(r#"
/// @layer reset, base;
/// @import "./reset.css" layer(reset);
/// @import "theme.css";
/// "#);
///
/// assert_eq!(sheet.layers, vec!["reset", "base"]);
/// assert_eq!(sheet.imports[0].layer.as_deref(), Some("reset"));
/// assert_eq!(sheet.imports[1].layer, None);
/// ```
pub fn parse_entry(content: &str) -> EntrySheet {
    let layers = LAYER_DECLARATION
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|names| {
            names
                .as_str()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let imports = IMPORT_DIRECTIVE
        .captures_iter(content)
        .map(|captures| ImportDirective {
            path: captures[1].to_string(),
            layer: captures
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|name| !name.is_empty())
                .map(String::from),
        })
        .collect();

    EntrySheet { layers, imports }
}

/// Remove every `@import` statement from an imported file's text.
///
/// Nested imports are deleted, never followed.
pub fn strip_nested_imports(content: &str) -> String {
    NESTED_IMPORT.replace_all(content, "").into_owned()
}
