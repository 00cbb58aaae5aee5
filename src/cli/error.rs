// Error handling utilities for consistent error messages and exit codes

use std::process;
use crate::error::LineError;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing files, bad configuration, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code >1), printing the cause chain
pub fn internal_error(err: &anyhow::Error) -> ! {
    eprintln!("Internal error: {}", err);
    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        eprintln!("\nCaused by:");
        for (indent, cause) in causes.enumerate() {
            eprintln!("{:indent$}  {}", "", cause, indent = indent + 1);
        }
    }
    process::exit(2);
}

/// Internal errors are I/O or serialization failures, not bad user input
pub fn is_internal(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.is::<std::io::Error>() || cause.is::<serde_json::Error>())
}

/// Report lines skipped in lenient mode on stderr
pub fn warn_skipped(skipped: &[LineError]) {
    for err in skipped {
        eprintln!("Warning: {}", err);
    }
}
