//! Splicing the declaration into a source file.
//!
//! The declaration goes as early as Python allows: directly after a leading
//! module docstring, or at the very top of the file otherwise. The splice is
//! a single insertion, so every original byte survives in order.

use crate::constants::{DECLARATION, UTF8_BOM};
use crate::error::SourceError;
use crate::utils::{detect_line_ending, LineIndex};
use ruff_python_ast::{Expr, Stmt, StmtExpr};
use ruff_python_parser::parse_module;

/// Where the declaration line is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    /// Byte offset of the insertion.
    pub offset: usize,
    /// The line before `offset` has no terminator (docstring ends the file),
    /// so one must be written before the declaration.
    pub needs_line_break: bool,
}

/// Returns `source` with `from __future__ import annotations` spliced in.
///
/// Empty and whitespace-only sources become the declaration line alone. This
/// function does not check whether the declaration is already there; gate it
/// with [`crate::detector::is_directive_present`].
///
/// # Errors
///
/// Returns [`SourceError::Syntax`] if `source` is not valid Python, and
/// [`SourceError::Unparseable`] if the declaration cannot be placed after
/// the docstring without breaking the code that follows it on the same line
/// (`"""doc"""; x = (` ...).
pub fn insert_directive(source: &str) -> Result<String, SourceError> {
    if source.trim().is_empty() {
        return Ok(format!("{DECLARATION}\n"));
    }

    let parsed = parse_module(source)?;
    let point = insertion_point(source, parsed.suite());
    let ending = detect_line_ending(source);

    let text = if point.needs_line_break {
        format!("{ending}{DECLARATION}{ending}")
    } else {
        format!("{DECLARATION}{ending}")
    };

    splice_verified(source, point.offset, &text)
}

/// Inserts `text` at byte `offset` and re-parses the result.
fn splice_verified(source: &str, offset: usize, text: &str) -> Result<String, SourceError> {
    if !source.is_char_boundary(offset) {
        return Err(SourceError::NotCharBoundary { offset });
    }

    let mut result = String::with_capacity(source.len() + text.len());
    result.push_str(&source[..offset]);
    result.push_str(text);
    result.push_str(&source[offset..]);

    if let Err(err) = parse_module(&result) {
        return Err(SourceError::Unparseable {
            message: err.to_string(),
        });
    }

    Ok(result)
}

/// Returns the module docstring statement, if the suite starts with one.
///
/// Only a bare `str` literal counts: bytes literals and f-strings are
/// ordinary expression statements.
#[must_use]
pub fn leading_docstring(suite: &[Stmt]) -> Option<&StmtExpr> {
    match suite.first() {
        Some(Stmt::Expr(expr_stmt)) if matches!(&*expr_stmt.value, Expr::StringLiteral(_)) => {
            Some(expr_stmt)
        }
        _ => None,
    }
}

/// Computes where the declaration goes in `source`, given its parsed suite.
#[must_use]
pub fn insertion_point(source: &str, suite: &[Stmt]) -> InsertionPoint {
    let Some(docstring) = leading_docstring(suite) else {
        let offset = if source.starts_with(UTF8_BOM) {
            UTF8_BOM.len_utf8()
        } else {
            0
        };
        return InsertionPoint {
            offset,
            needs_line_break: false,
        };
    };

    let line_index = LineIndex::new(source);
    match line_index.next_line_start(docstring.range.end()) {
        Some(offset) => InsertionPoint {
            offset,
            needs_line_break: false,
        },
        None => InsertionPoint {
            offset: source.len(),
            needs_line_break: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_for(source: &str) -> InsertionPoint {
        let parsed = parse_module(source).unwrap();
        insertion_point(source, parsed.suite())
    }

    #[test]
    fn test_docstring_detected() {
        let parsed = parse_module("'''doc'''\nx = 1\n").unwrap();
        assert!(leading_docstring(parsed.suite()).is_some());
    }

    #[test]
    fn test_bytes_literal_is_not_docstring() {
        let parsed = parse_module("b'data'\n").unwrap();
        assert!(leading_docstring(parsed.suite()).is_none());
    }

    #[test]
    fn test_fstring_is_not_docstring() {
        let parsed = parse_module("f'{x}'\n").unwrap();
        assert!(leading_docstring(parsed.suite()).is_none());
    }

    #[test]
    fn test_string_after_import_is_not_docstring() {
        let parsed = parse_module("import os\n'''doc'''\n").unwrap();
        assert!(leading_docstring(parsed.suite()).is_none());
    }

    #[test]
    fn test_point_without_docstring() {
        assert_eq!(
            point_for("import os\n"),
            InsertionPoint {
                offset: 0,
                needs_line_break: false
            }
        );
    }

    #[test]
    fn test_point_after_multiline_docstring() {
        let source = "\"\"\"\nDocs.\n\"\"\"\nimport os\n";
        assert_eq!(point_for(source).offset, source.find("import").unwrap());
    }

    #[test]
    fn test_point_docstring_at_eof() {
        let source = "\"\"\"Docs.\"\"\"";
        assert_eq!(
            point_for(source),
            InsertionPoint {
                offset: source.len(),
                needs_line_break: true
            }
        );
    }

    #[test]
    fn test_point_skips_bom() {
        let source = "\u{feff}import os\n";
        assert_eq!(point_for(source).offset, 3);
    }

    #[test]
    fn test_point_after_cr_terminated_docstring() {
        let source = "\"\"\"Docs.\"\"\"\rimport os\r";
        assert_eq!(
            point_for(source),
            InsertionPoint {
                offset: source.find("import").unwrap(),
                needs_line_break: false
            }
        );
    }

    #[test]
    fn test_splice_rejects_offset_inside_char() {
        let err = splice_verified("é = 1\n", 1, "x").unwrap_err();
        assert!(matches!(err, SourceError::NotCharBoundary { offset: 1 }));
    }

    #[test]
    fn test_splice_rejects_broken_result() {
        let err = splice_verified("def f():\n    pass\n", 9, "(((\n").unwrap_err();
        assert!(matches!(err, SourceError::Unparseable { .. }));
    }

    #[test]
    fn test_comment_only_file_gets_prepended() {
        assert_eq!(
            insert_directive("# just a comment\n").unwrap(),
            "from __future__ import annotations\n# just a comment\n"
        );
    }
}
