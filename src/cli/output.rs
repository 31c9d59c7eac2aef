use std::fmt;
use std::io::{self, Write};

use crate::errors::BridgeError;

/// Renders a failure the way it is shown on stderr.
pub fn format_error(err: &BridgeError) -> String {
    match err {
        BridgeError::Unexpected(detail) => format!("Error: unexpected failure\n{detail}"),
        other => format!("Error: {other}"),
    }
}

/// Writes `message` on its own line to stderr.
pub fn error(message: impl fmt::Display) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Nothing left to report to if stderr is gone.
    let _ = writeln!(handle, "{message}");
}

pub fn report(err: &BridgeError) {
    error(format_error(err));
}
