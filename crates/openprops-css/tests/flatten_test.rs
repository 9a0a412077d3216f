//! Integration tests for stylesheet flattening.
//!
//! Each test builds a stylesheet directory in a temp dir and runs the full
//! flattening pass against the real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use openprops_css::{FlattenError, FlattenOptions, FlattenReport, flatten};
use tempfile::TempDir;

/// Write `files` (relative path, content) under a fresh temp dir.
fn css_dir(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    for (name, content) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(path, content).expect("Failed to write fixture file");
    }
    temp
}

fn run(dir: &Path) -> (FlattenReport, String) {
    let report = flatten(&FlattenOptions::new(dir)).expect("flatten failed");
    let output = fs::read_to_string(&report.output_path).expect("Failed to read output");
    (report, output)
}

#[test]
fn test_representative_directory() {
    let temp = css_dir(&[
        (
            "main.css",
            r#"@layer reset, theme, components;

@import "./reset.css" layer(reset);
@import "./theme.css" layer(theme);
@import "./actions/button.css" layer(components);
@import "./extra.css";
"#,
        ),
        ("reset.css", "* { margin: 0; }\n"),
        ("theme.css", "@import \"./tokens.css\";\n:root { --primary: blue; }\n"),
        ("actions/button.css", ".button { color: var(--primary); }\n"),
        ("extra.css", ".extra { display: none; }\n"),
    ]);

    let (report, output) = run(temp.path());

    assert_eq!(report.files_combined, 4);
    assert_eq!(report.layers, vec!["reset", "theme", "components"]);
    assert_eq!(report.output_path, temp.path().join("flat.css"));
    insta::assert_snapshot!(output, @r"
    @layer reset, theme, components;

    /* From: ./reset.css */
    @layer reset {
    * { margin: 0; }
    }

    /* From: ./theme.css */
    @layer theme {
    :root { --primary: blue; }
    }

    /* From: ./actions/button.css */
    @layer components {
    .button { color: var(--primary); }
    }

    /* From: ./extra.css */
    .extra { display: none; }
    ");
}

#[test]
fn test_no_layer_line_without_declaration() {
    let temp = css_dir(&[
        ("main.css", "@import \"a.css\" layer(util);\n"),
        ("a.css", ".a { }\n"),
    ]);

    let (report, output) = run(temp.path());

    assert!(report.layers.is_empty());
    let first = output.lines().next().unwrap();
    assert_eq!(first, "/* From: a.css */");
    assert!(
        !output
            .lines()
            .any(|line| line.starts_with("@layer") && line.ends_with(';'))
    );
}

#[test]
fn test_first_line_is_layer_declaration() {
    let temp = css_dir(&[
        (
            "main.css",
            "@layer reset, base;\n@import \"./reset.css\" layer(reset);\n",
        ),
        ("reset.css", "html { }\n"),
    ]);

    let (_, output) = run(temp.path());

    let first = output.lines().find(|line| !line.trim().is_empty()).unwrap();
    assert_eq!(first, "@layer reset, base;");
}

#[test]
fn test_duplicate_import_emitted_once() {
    let temp = css_dir(&[
        (
            "main.css",
            "@import \"./a.css\" layer(one);\n@import \"a.css\" layer(two);\n",
        ),
        ("a.css", ".only-once { }\n"),
    ]);

    let (report, output) = run(temp.path());

    assert_eq!(report.files_combined, 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(output.matches(".only-once").count(), 1);
    assert!(output.contains("@layer one {"));
    assert!(!output.contains("@layer two {"));
}

#[test]
fn test_nested_imports_are_stripped_not_followed() {
    let temp = css_dir(&[
        ("main.css", "@import \"./a.css\" layer(util);\n"),
        ("a.css", "@import \"./b.css\";\n.a { }\n"),
        ("b.css", ".from-b { }\n"),
    ]);

    let (report, output) = run(temp.path());

    assert_eq!(report.files_combined, 1);
    assert!(!output.contains("@import"));
    assert!(!output.contains(".from-b"));
    assert!(output.contains(".a { }"));
}

#[test]
fn test_missing_import_is_skipped() {
    let temp = css_dir(&[
        (
            "main.css",
            "@import \"./a.css\";\n@import \"./gone.css\" layer(x);\n@import \"./c.css\";\n",
        ),
        ("a.css", ".a { }\n"),
        ("c.css", ".c { }\n"),
    ]);

    let (report, output) = run(temp.path());

    assert_eq!(report.files_combined, 2);
    assert_eq!(report.missing, vec!["./gone.css".to_string()]);
    assert!(!output.contains("gone.css"));
    assert!(output.find(".a { }").unwrap() < output.find(".c { }").unwrap());
}

#[test]
fn test_zero_imports_with_layers() {
    let temp = css_dir(&[("main.css", "@layer a, b;\n")]);

    let (report, output) = run(temp.path());

    assert_eq!(report.files_combined, 0);
    assert_eq!(output, "@layer a, b;\n");
}

#[test]
fn test_zero_imports_without_layers() {
    let temp = css_dir(&[("main.css", "body { margin: 0; }\n")]);

    let (_, output) = run(temp.path());

    assert_eq!(output, "");
}

#[test]
fn test_custom_output_path_creates_parents() {
    let temp = css_dir(&[("main.css", "@import \"a.css\";\n"), ("a.css", ".a { }\n")]);
    let output_path = temp.path().join("dist/nested/site.css");

    let report = flatten(&FlattenOptions::new(temp.path()).with_output(&output_path))
        .expect("flatten failed");

    assert_eq!(report.output_path, output_path);
    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "/* From: a.css */\n.a { }\n");
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp = css_dir(&[
        ("main.css", "@import \"a.css\";\n"),
        ("a.css", ".a { }\n"),
        ("flat.css", "stale content that is much longer than the new output\n"),
    ]);

    let (_, output) = run(temp.path());

    assert_eq!(output, "/* From: a.css */\n.a { }\n");
}

#[test]
fn test_custom_entry_name() {
    let temp = css_dir(&[
        ("index.css", "@import \"a.css\";\n"),
        ("a.css", ".a { }\n"),
    ]);

    let report = flatten(&FlattenOptions::new(temp.path()).with_entry("index.css"))
        .expect("flatten failed");

    assert_eq!(report.files_combined, 1);
}

#[test]
fn test_missing_directory_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = flatten(&FlattenOptions::new(&missing)).unwrap_err();

    assert!(matches!(err, FlattenError::DirectoryNotFound { .. }));
    assert!(err.is_configuration());
    assert!(err.to_string().contains("directory not found"));
}

#[test]
fn test_file_as_directory_is_configuration_error() {
    let temp = css_dir(&[("not-a-dir.css", "")]);

    let err = flatten(&FlattenOptions::new(temp.path().join("not-a-dir.css"))).unwrap_err();

    assert!(matches!(err, FlattenError::DirectoryNotFound { .. }));
}

#[test]
fn test_missing_entry_is_configuration_error_and_writes_nothing() {
    let temp = css_dir(&[("a.css", ".a { }\n")]);

    let err = flatten(&FlattenOptions::new(temp.path())).unwrap_err();

    assert!(matches!(err, FlattenError::EntryNotFound { .. }));
    assert!(err.is_configuration());
    assert!(err.to_string().contains("main.css not found"));
    assert!(!temp.path().join("flat.css").exists());
}

#[test]
fn test_output_order_follows_import_order() {
    let temp = css_dir(&[
        (
            "main.css",
            "@import \"z.css\";\n@import \"m.css\";\n@import \"a.css\";\n",
        ),
        ("z.css", ".z { }\n"),
        ("m.css", ".m { }\n"),
        ("a.css", ".a { }\n"),
    ]);

    let (_, output) = run(temp.path());

    let sources: Vec<PathBuf> = output
        .lines()
        .filter_map(|line| line.strip_prefix("/* From: "))
        .filter_map(|rest| rest.strip_suffix(" */"))
        .map(PathBuf::from)
        .collect();
    assert_eq!(
        sources,
        vec![
            PathBuf::from("z.css"),
            PathBuf::from("m.css"),
            PathBuf::from("a.css")
        ]
    );
}

#[test]
fn test_unreadable_import_is_io_error_and_writes_nothing() {
    let temp = css_dir(&[("main.css", "@import \"./a.css\";\n@import \"./bad.css\";\n")]);
    fs::write(temp.path().join("a.css"), ".a { }\n").unwrap();
    fs::write(temp.path().join("bad.css"), [0xffu8, 0xfe, 0x00]).unwrap();

    let err = flatten(&FlattenOptions::new(temp.path())).unwrap_err();

    assert!(matches!(err, FlattenError::Io { ref path, .. } if path.ends_with("bad.css")));
    assert!(!err.is_configuration());
    assert!(!temp.path().join("flat.css").exists());
}

#[test]
fn test_metadata_failure_is_not_treated_as_missing() {
    let long_name = format!("{}.css", "x".repeat(300));
    let entry = format!("@import \"./{long_name}\";\n");
    let temp = css_dir(&[("main.css", entry.as_str())]);

    let err = flatten(&FlattenOptions::new(temp.path())).unwrap_err();

    assert!(matches!(err, FlattenError::Io { .. }));
    assert!(!err.is_configuration());
    assert!(!temp.path().join("flat.css").exists());
}

#[test]
fn test_import_through_a_file_is_missing() {
    let temp = css_dir(&[
        ("main.css", "@import \"./a.css/inner.css\";\n@import \"./dir\";\n"),
        ("a.css", ".a { }\n"),
        ("dir/keep.css", ""),
    ]);

    let (report, output) = run(temp.path());

    assert_eq!(report.files_combined, 0);
    assert_eq!(
        report.missing,
        vec!["./a.css/inner.css".to_string(), "./dir".to_string()]
    );
    assert_eq!(output, "");
}
