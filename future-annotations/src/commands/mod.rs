//! Commands module - implementations behind the command-line interface.

mod fix;

pub use fix::{fix_file, run_fix, FileOutcome};
