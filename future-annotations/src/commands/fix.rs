//! Fix command: ensure each file carries the annotations import.

use crate::config::{Config, ConfigCache, FixConfiguration};
use crate::constants::{EXIT_CHANGED, EXIT_CLEAN};
use crate::detector::is_directive_present;
use crate::error::SourceError;
use crate::output;
use crate::splicer::insert_directive;
use crate::utils::{normalize_display_path, LineIndex};
use ruff_python_parser::ParseError;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Terminal state of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Zero-byte file left alone because `allow_empty` is off.
    SkippedEmpty,
    /// File does not parse and was left alone.
    SkippedSyntax,
    /// The declaration could not be inserted without breaking the file,
    /// which was left alone.
    SkippedUnsafe,
    /// Declaration already present.
    Clean,
    /// Declaration missing, not written (check-only).
    Flagged,
    /// Declaration missing and written.
    Rewritten,
}

impl FileOutcome {
    /// Contribution of this outcome to the process exit status.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::SkippedEmpty | Self::SkippedSyntax | Self::SkippedUnsafe | Self::Clean => {
                EXIT_CLEAN
            }
            Self::Flagged | Self::Rewritten => EXIT_CHANGED,
        }
    }

    /// Short description used for verbose output.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::SkippedEmpty => "empty file skipped",
            Self::SkippedSyntax => "skipped due to syntax error",
            Self::SkippedUnsafe => "skipped, declaration cannot be inserted safely",
            Self::Clean => "annotations import already present",
            Self::Flagged => "annotations import missing",
            Self::Rewritten => "annotations import added",
        }
    }
}

/// Check one file and add the annotations import if it is missing.
///
/// Syntax errors, and files where the declaration cannot be placed without
/// breaking them, are reported on `writer` and skipped, never returned as
/// errors.
///
/// # Errors
///
/// Returns an error if the file cannot be inspected, read or written.
pub fn fix_file<W: Write>(
    path: &Path,
    config: &FixConfiguration,
    writer: &mut W,
) -> Result<FileOutcome> {
    if !config.allow_empty {
        let metadata = fs::metadata(path)
            .with_context(|| format!("failed to stat {}", normalize_display_path(path)))?;
        if metadata.len() == 0 {
            return Ok(FileOutcome::SkippedEmpty);
        }
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", normalize_display_path(path)))?;

    let present = match is_directive_present(&content) {
        Ok(present) => present,
        Err(err) => return report_syntax_error(writer, path, &content, &err),
    };

    if present {
        return Ok(FileOutcome::Clean);
    }

    if config.check_only {
        output::print_flagged(writer, path)?;
        return Ok(FileOutcome::Flagged);
    }

    let fixed = match insert_directive(&content) {
        Ok(fixed) => fixed,
        Err(SourceError::Syntax(err)) => return report_syntax_error(writer, path, &content, &err),
        Err(err) => {
            output::print_splice_skip(writer, path, &err.to_string())?;
            return Ok(FileOutcome::SkippedUnsafe);
        }
    };
    fs::write(path, fixed)
        .with_context(|| format!("failed to write {}", normalize_display_path(path)))?;
    output::print_rewritten(writer, path)?;

    Ok(FileOutcome::Rewritten)
}

fn report_syntax_error<W: Write>(
    writer: &mut W,
    path: &Path,
    content: &str,
    err: &ParseError,
) -> Result<FileOutcome> {
    let line = LineIndex::new(content).line_index(err.location.start());
    output::print_syntax_skip(writer, path, line, &err.error.to_string())?;
    Ok(FileOutcome::SkippedSyntax)
}

/// Run [`fix_file`] over `paths` in order and OR the per-file statuses.
///
/// `flags` holds the command-line switches. Each file combines them with the
/// configuration found above its own directory.
///
/// # Errors
///
/// Returns the first I/O error; remaining files are not processed.
pub fn run_fix<W: Write>(
    paths: &[PathBuf],
    flags: &FixConfiguration,
    verbose: bool,
    writer: &mut W,
) -> Result<i32> {
    let mut status = EXIT_CLEAN;
    let mut configs = ConfigCache::default();
    let mut last_reported: Option<Config> = None;

    for path in paths {
        let file_config = configs.for_file(path);
        let config = file_config.resolve(flags.check_only, flags.allow_empty);
        if verbose && last_reported.as_ref() != Some(file_config) {
            output::print_configuration(
                writer,
                &config,
                file_config.config_file_path.as_deref(),
                &file_config.rejected_files,
            )?;
            last_reported = Some(file_config.clone());
        }

        let outcome = fix_file(path, &config, writer)?;
        if verbose && matches!(outcome, FileOutcome::Clean | FileOutcome::SkippedEmpty) {
            output::print_verbose(
                writer,
                &format!("{}: {}", normalize_display_path(path), outcome.describe()),
            )?;
        }
        status |= outcome.exit_code();
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_temp(dir: &TempDir, name: &str, source: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, source).unwrap();
        path
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(FileOutcome::SkippedEmpty.exit_code(), 0);
        assert_eq!(FileOutcome::SkippedSyntax.exit_code(), 0);
        assert_eq!(FileOutcome::Clean.exit_code(), 0);
        assert_eq!(FileOutcome::Flagged.exit_code(), 1);
        assert_eq!(FileOutcome::Rewritten.exit_code(), 1);
    }

    #[test]
    fn test_fix_file_rewrites() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "a.py", "import os\n");

        let mut buffer = Vec::new();
        let outcome = fix_file(&path, &FixConfiguration::default(), &mut buffer).unwrap();

        assert_eq!(outcome, FileOutcome::Rewritten);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "from __future__ import annotations\nimport os\n"
        );
        assert!(String::from_utf8(buffer).unwrap().contains("a.py"));
    }

    #[test]
    fn test_fix_file_syntax_error_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "bad.py", "import os\n\nprin t\n");

        let mut buffer = Vec::new();
        let outcome = fix_file(&path, &FixConfiguration::default(), &mut buffer).unwrap();

        assert_eq!(outcome, FileOutcome::SkippedSyntax);
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("bad.py"));
        assert!(out.contains("syntax error at line 3"));
    }

    #[test]
    fn test_fix_file_unsafe_splice_is_skipped() {
        let dir = TempDir::new().unwrap();
        let source = "\"\"\"Docs.\"\"\"; x = (\n1)\n";
        let path = write_temp(&dir, "joined.py", source);

        let mut buffer = Vec::new();
        let outcome = fix_file(&path, &FixConfiguration::default(), &mut buffer).unwrap();

        assert_eq!(outcome, FileOutcome::SkippedUnsafe);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), source);
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("joined.py"));
        assert!(out.contains("would break the file"));
    }

    #[test]
    fn test_fix_file_missing_path_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.py");

        let mut buffer = Vec::new();
        let err = fix_file(&path, &FixConfiguration::default(), &mut buffer).unwrap_err();
        assert!(err.to_string().contains("missing.py"));
    }

    #[test]
    fn test_run_fix_verbose_reports_clean_files() {
        let dir = TempDir::new().unwrap();
        let clean = write_temp(&dir, "clean.py", "from __future__ import annotations\n");
        let empty = write_temp(&dir, "empty.py", "");

        let mut buffer = Vec::new();
        let status = run_fix(
            &[clean, empty],
            &FixConfiguration::default(),
            true,
            &mut buffer,
        )
        .unwrap();

        assert_eq!(status, 0);
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("clean.py: annotations import already present"));
        assert!(out.contains("empty.py: empty file skipped"));
    }
}
