//! Errors raised by the pure source transformations.

use ruff_python_parser::ParseError;

/// Failure of a source-level operation.
///
/// Parse failures are kept distinct so callers can decide to skip the file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The input is not valid Python.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),
    /// The insertion offset does not fall on a character boundary.
    #[error("insertion offset {offset} splits a UTF-8 character")]
    NotCharBoundary {
        /// Offending byte offset
        offset: usize,
    },
    /// The declaration cannot go after the docstring without breaking the
    /// statement that shares its line.
    #[error("inserting the declaration would break the file: {message}")]
    Unparseable {
        /// Parser message for the spliced source
        message: String,
    },
}

impl SourceError {
    /// Returns `true` for [`SourceError::Syntax`].
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}
