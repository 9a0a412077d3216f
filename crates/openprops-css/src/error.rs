//! Error types for stylesheet operations.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while flattening a stylesheet directory
#[derive(Debug, Error)]
pub enum FlattenError {
    /// Source directory is missing or is not a directory
    #[error("CSS directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Entry stylesheet is missing from the source directory
    #[error("{entry} not found in {}", .dir.display())]
    EntryNotFound { entry: String, dir: PathBuf },

    /// Any other read or write failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlattenError {
    /// True for the precondition failures that abort before anything is written.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FlattenError::DirectoryNotFound { .. } | FlattenError::EntryNotFound { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlattenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while loading theme settings
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Settings file could not be read
    #[error("Failed to read theme settings {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for a theme
    #[error("Invalid theme settings: {0}")]
    Parse(#[from] toml::de::Error),
}
