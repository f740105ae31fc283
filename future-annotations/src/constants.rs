//! Shared constants.

/// The declaration this tool guarantees at the top of every file.
pub const DECLARATION: &str = "from __future__ import annotations";

/// The compile-time-directives pseudo-module.
pub const FUTURE_MODULE: &str = "__future__";

/// The feature name imported from [`FUTURE_MODULE`].
pub const ANNOTATIONS_FEATURE: &str = "annotations";

/// Dedicated configuration file name, looked up before `pyproject.toml`.
pub const CONFIG_FILENAME: &str = ".future-annotations.toml";

/// Python project file name holding a `[tool.import-future-annotations]` table.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Table name used in both configuration files.
pub const CONFIG_SECTION: &str = "import-future-annotations";

/// UTF-8 byte order mark as decoded into a `str`.
pub const UTF8_BOM: char = '\u{feff}';

/// Exit status for a file (or batch) that needed no change.
pub const EXIT_CLEAN: i32 = 0;

/// Exit status for a file (or batch) that was rewritten or flagged.
pub const EXIT_CHANGED: i32 = 1;

/// Exit status for command-line usage errors.
pub const EXIT_USAGE: i32 = 2;
