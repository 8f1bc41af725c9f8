//! UI helper functions for terminal output.

use std::io::Write;

/// Writes `Error: <msg>` to the error stream.
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}
