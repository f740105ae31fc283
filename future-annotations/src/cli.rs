use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.future-annotations.toml):
  Create this file in your project root to set defaults.

  [import-future-annotations]
  check_only = false         # Never write, only report
  allow_empty = false        # Process files of size 0

  The same keys are read from [tool.import-future-annotations]
  in pyproject.toml. Each file uses the nearest config found
  from its own directory upwards. Configured options cannot be
  switched off from the command line.

EXIT STATUS:
  0  nothing to change
  1  at least one file was changed (or would be, with --check-only)
  2  invalid command line
";

/// Options for output verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Also report files that were already fine or skipped as empty.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    name = "import-future-annotations",
    version,
    about = "Add import responsible for postponed evaluation of annotations to python files",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Python files to check and fix, processed in the given order.
    pub filenames: Vec<PathBuf>,

    /// Doesn't modify files, only checks.
    #[arg(long)]
    pub check_only: bool,

    /// Process files of size 0 instead of skipping them.
    #[arg(long)]
    pub allow_empty: bool,

    /// Output options.
    #[command(flatten)]
    pub output: OutputOptions,
}
