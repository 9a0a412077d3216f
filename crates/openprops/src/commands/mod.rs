//! Command implementations for the openprops CLI
//!
//! Each command module handles the CLI interface and delegates to
//! openprops-css for the actual work.

pub mod flatten;
pub mod theme;
