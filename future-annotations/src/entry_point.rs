//! Entry point shared by every binary.

use crate::cli::Cli;
use crate::config::FixConfiguration;
use crate::constants::{EXIT_CLEAN, EXIT_USAGE};
use anyhow::Result;
use clap::Parser;

/// Run the fixer with the given arguments, reporting on stderr.
///
/// `args` excludes the program name.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stderr())
}

/// Run the fixer with the given arguments, writing notices to `writer`.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Usage errors are rendered on stderr and yield exit status 2; `--help` and
/// `--version` are written to `writer`.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["import-future-annotations".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(EXIT_CLEAN);
            }
            _ => {
                eprint!("{e}");
                return Ok(EXIT_USAGE);
            }
        },
    };

    let flags = FixConfiguration {
        check_only: cli_var.check_only,
        allow_empty: cli_var.allow_empty,
    };

    if cli_var.output.verbose {
        crate::output::print_verbose(
            writer,
            &format!("import-future-annotations v{}", env!("CARGO_PKG_VERSION")),
        )?;
    }

    let status =
        crate::commands::run_fix(&cli_var.filenames, &flags, cli_var.output.verbose, writer)?;
    writer.flush()?;
    Ok(status)
}
