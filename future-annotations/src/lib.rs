//! Core library for the `import-future-annotations` fixer.
//!
//! The library makes sure every Python file it is given starts with
//! `from __future__ import annotations`, placed right after the module
//! docstring when there is one. Detection and insertion both work on the
//! `ruff` syntax tree, so look-alike text inside strings, comments or nested
//! scopes is never mistaken for the real import.
//!
//! ```
//! use future_annotations::{insert_directive, is_directive_present};
//!
//! let source = "\"\"\"Module docs.\"\"\"\nimport os\n";
//! assert!(!is_directive_present(source).unwrap());
//!
//! let fixed = insert_directive(source).unwrap();
//! assert_eq!(
//!     fixed,
//!     "\"\"\"Module docs.\"\"\"\nfrom __future__ import annotations\nimport os\n"
//! );
//! assert!(is_directive_present(&fixed).unwrap());
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module containing shared constants (the declaration, config file names).
pub mod constants;

/// Module detecting an existing `from __future__ import annotations`.
pub mod detector;

/// Module computing the rewritten source with the declaration spliced in.
pub mod splicer;

/// Module defining the error types of the pure source-level operations.
pub mod error;

/// Module for loading configuration from `.future-annotations.toml` or `pyproject.toml`.
pub mod config;

/// Module containing utility functions (line index, line endings, display paths).
pub mod utils;

/// Module for coloured human-readable notices.
pub mod output;

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for the per-file and batch fix commands.
pub mod commands;

/// Module defining the entry point shared by every binary.
pub mod entry_point;

pub use detector::is_directive_present;
pub use error::SourceError;
pub use splicer::insert_directive;
