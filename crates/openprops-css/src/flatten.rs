//! Stylesheet flattening.
//!
//! Copyright (c) 2025 Posit, PBC
//!
//! Flattening reads the entry stylesheet, then emits one block per distinct
//! imported file in import order:
//!
//! 1. The `@layer` declaration from the entry file, if there is one
//! 2. For each import: a `/* From: <path> */` comment followed by the file's
//!    content, wrapped in `@layer <name> { ... }` when the import names a layer
//!
//! Imports inside imported files are deleted rather than followed, so the
//! result is exactly one level deep.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::directive::{parse_entry, strip_nested_imports};
use crate::error::FlattenError;
use crate::options::FlattenOptions;

/// Outcome of a successful flattening pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenReport {
    /// Where the flattened stylesheet was written
    pub output_path: PathBuf,

    /// Layer names declared by the entry file
    pub layers: Vec<String>,

    /// Number of distinct files emitted
    pub files_combined: usize,

    /// Import paths (as written) whose files do not exist
    pub missing: Vec<String>,

    /// Imports skipped because their file was already emitted
    pub duplicates: usize,
}

/// Flatten the entry stylesheet in `options.css_dir` into one output file.
///
/// # Errors
///
/// - [`FlattenError::DirectoryNotFound`] / [`FlattenError::EntryNotFound`] when
///   the preconditions fail; nothing is written in that case.
/// - [`FlattenError::Io`] for any other read or write failure.
///
/// An import whose file does not exist is logged and skipped.
pub fn flatten(options: &FlattenOptions) -> Result<FlattenReport, FlattenError> {
    if !options.css_dir.is_dir() {
        return Err(FlattenError::DirectoryNotFound {
            path: options.css_dir.clone(),
        });
    }

    let entry_path = options.entry_path();
    if !is_regular_file(&entry_path)? {
        return Err(FlattenError::EntryNotFound {
            entry: options.entry.clone(),
            dir: options.css_dir.clone(),
        });
    }

    let entry_css =
        fs::read_to_string(&entry_path).map_err(|e| FlattenError::io(&entry_path, e))?;
    let sheet = parse_entry(&entry_css);

    let mut blocks: Vec<String> = Vec::new();
    let mut report = FlattenReport {
        output_path: options.output_path(),
        layers: sheet.layers.clone(),
        ..Default::default()
    };

    if let Some(declaration) = sheet.layer_declaration() {
        info!("Found layers: {}", sheet.layers.join(", "));
        blocks.push(declaration);
    }

    let mut processed: HashSet<PathBuf> = HashSet::new();

    for import in &sheet.imports {
        let file_path = options.resolve_import(&import.path);

        if !is_regular_file(&file_path)? {
            warn!("File not found: {}", file_path.display());
            report.missing.push(import.path.clone());
            continue;
        }

        if processed.contains(&file_path) {
            debug!("Skipping duplicate import: {}", import.path);
            report.duplicates += 1;
            continue;
        }

        debug!("Combining {}", file_path.display());
        let content =
            fs::read_to_string(&file_path).map_err(|e| FlattenError::io(&file_path, e))?;
        let content = strip_nested_imports(&content);

        blocks.push(render_import_block(
            &import.path,
            import.layer.as_deref(),
            &content,
        ));
        processed.insert(file_path);
    }

    report.files_combined = processed.len();

    let mut output = blocks.join("\n\n");
    if !output.is_empty() {
        output.push('\n');
    }

    if let Some(parent) = report
        .output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|e| FlattenError::io(parent, e))?;
    }
    fs::write(&report.output_path, output)
        .map_err(|e| FlattenError::io(&report.output_path, e))?;

    info!("Flattened CSS created at: {}", report.output_path.display());
    info!("Combined {} CSS files", report.files_combined);

    Ok(report)
}

/// Whether `path` names a regular file.
///
/// A path that does not exist (or runs through a non-directory) is `Ok(false)`,
/// as is a directory. Any other metadata failure is an I/O error.
fn is_regular_file(path: &Path) -> Result<bool, FlattenError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(false),
        Err(e) => Err(FlattenError::io(path, e)),
    }
}

/// Render one import's block: a source comment, then the content, layer-wrapped
/// when `layer` is given.
///
/// # Example
///
/// ```
/// use openprops_css::render_import_block;
///
/// let block = render_import_block("./a.css", Some("util"), "\n.a { }\n");
/// assert_eq!(block, "/* From: ./a.css */\n@layer util {\n.a { }\n}");
/// ```
pub fn render_import_block(path: &str, layer: Option<&str>, content: &str) -> String {
    let content = content.trim();
    match layer {
        Some(layer) => format!("/* From: {path} */\n@layer {layer} {{\n{content}\n}}"),
        None => format!("/* From: {path} */\n{content}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_regular_file_classification() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("a.css");
        fs::write(&file, ".a { }").unwrap();

        assert!(is_regular_file(&file).unwrap());
        assert!(!is_regular_file(temp.path()).unwrap());
        assert!(!is_regular_file(&temp.path().join("missing.css")).unwrap());
        assert!(!is_regular_file(&file.join("inner.css")).unwrap());

        let too_long = temp.path().join(format!("{}.css", "x".repeat(300)));
        let err = is_regular_file(&too_long).unwrap_err();
        assert!(matches!(err, FlattenError::Io { .. }));
    }

    #[test]
    fn test_block_without_layer() {
        let block = render_import_block("theme.css", None, "  :root { }  \n");
        assert_eq!(block, "/* From: theme.css */\n:root { }");
    }

    #[test]
    fn test_block_with_layer() {
        let block = render_import_block("./reset.css", Some("reset"), "* { margin: 0; }");
        assert_eq!(
            block,
            "/* From: ./reset.css */\n@layer reset {\n* { margin: 0; }\n}"
        );
    }

    #[test]
    fn test_block_with_empty_content() {
        let block = render_import_block("empty.css", Some("x"), "\n\n");
        assert_eq!(block, "/* From: empty.css */\n@layer x {\n\n}");
    }
}
