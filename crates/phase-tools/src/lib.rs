// File: crates/phase-tools/src/lib.rs
// Summary: Shared plumbing for the CLI binaries: argument parsing, logging and exit handling.

pub mod args;
pub mod logging;

use phase_core::Error;

/// Exit status for a usage error.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Turn a top-level failure into a process exit: usage errors print the
/// usage line and exit with [`USAGE_EXIT_CODE`], anything else is returned
/// for `main` to report.
pub fn exit_on_usage(result: anyhow::Result<()>) -> anyhow::Result<()> {
    if let Err(err) = &result {
        if let Some(Error::Usage(msg)) = err.downcast_ref::<Error>() {
            eprintln!("Usage: {}", msg);
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
    result
}
