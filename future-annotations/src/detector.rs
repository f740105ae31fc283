//! Detection of an existing `from __future__ import annotations`.
//!
//! Only direct children of the module are inspected. An import nested inside
//! a function, class or conditional block is not a compile-time directive and
//! therefore does not count.

use crate::constants::{ANNOTATIONS_FEATURE, FUTURE_MODULE};
use ruff_python_ast::Stmt;
use ruff_python_parser::{parse_module, ParseError};

/// Returns `true` if `source` imports `annotations` from `__future__` at module level.
///
/// The whole top-level suite is scanned, not just the leading block of imports.
///
/// # Errors
///
/// Returns the parser error when `source` is not valid Python. This is a signal
/// to skip the file, never a negative answer.
pub fn is_directive_present(source: &str) -> Result<bool, ParseError> {
    let parsed = parse_module(source)?;
    Ok(parsed.suite().iter().any(is_directive_import))
}

/// Checks whether a single statement is `from __future__ import annotations`.
///
/// Relative imports never match, and the feature may appear anywhere in the
/// imported names, with or without an alias.
#[must_use]
pub fn is_directive_import(stmt: &Stmt) -> bool {
    let Stmt::ImportFrom(import) = stmt else {
        return false;
    };
    if import.level != 0 {
        return false;
    }
    let Some(module) = &import.module else {
        return false;
    };
    module.as_str() == FUTURE_MODULE
        && import
            .names
            .iter()
            .any(|alias| alias.name.as_str() == ANNOTATIONS_FEATURE)
}
