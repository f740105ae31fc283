//! Human-readable notices written while fixing files.
//!
//! Every function takes the destination writer so the binaries can send the
//! notices to stderr while tests capture them in memory.

use crate::config::FixConfiguration;
use crate::utils::normalize_display_path;
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Announce that the declaration was written into `path`.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rewritten(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        "Adding annotations import to".green(),
        normalize_display_path(path)
    )
}

/// Announce that `path` lacks the declaration (check-only mode).
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_flagged(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        "Missing annotations import in".yellow(),
        normalize_display_path(path)
    )
}

/// Announce that `path` was skipped because it does not parse.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_syntax_skip(
    writer: &mut impl Write,
    path: &Path,
    line: usize,
    message: &str,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}: syntax error at line {line}: {message}",
        "Skipping".red(),
        normalize_display_path(path)
    )
}

/// Announce that `path` was skipped because the declaration cannot be
/// inserted without breaking it.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_splice_skip(
    writer: &mut impl Write,
    path: &Path,
    message: &str,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}: {message}",
        "Skipping".red(),
        normalize_display_path(path)
    )
}

/// Emit a `[VERBOSE]` diagnostic line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_verbose(writer: &mut impl Write, message: &str) -> std::io::Result<()> {
    writeln!(writer, "{} {message}", "[VERBOSE]".dimmed())
}

/// Emit the effective configuration in verbose mode, together with any
/// config file that was ignored because it did not parse.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_configuration(
    writer: &mut impl Write,
    config: &FixConfiguration,
    source: Option<&Path>,
    rejected: &[(PathBuf, String)],
) -> std::io::Result<()> {
    for (path, message) in rejected {
        print_verbose(
            writer,
            &format!(
                "ignoring config {}: {message}",
                normalize_display_path(path)
            ),
        )?;
    }
    let origin = source.map_or_else(|| "defaults".to_owned(), normalize_display_path);
    print_verbose(
        writer,
        &format!(
            "config: {origin} (check_only={} allow_empty={})",
            config.check_only, config.allow_empty
        ),
    )
}
