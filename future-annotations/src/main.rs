//! Main binary entry point for the `import-future-annotations` fixer.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so that it behaves exactly like the `future-annotations-cli` binary.

use anyhow::Result;

fn main() -> Result<()> {
    let code = future_annotations::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
