use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Failures the bridge reports, each with its own process exit code.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Shell automation is unavailable: {0}")]
    AutomationUnavailable(String),
    #[error("Namespace {namespace} is unavailable: {reason}")]
    NamespaceUnavailable { namespace: String, reason: String },
    #[error("--invoke requires the name of the item to open")]
    MissingArgument,
    #[error("No item named \"{0}\" was found")]
    NotFound(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            BridgeError::Unexpected(_) => 1,
            BridgeError::AutomationUnavailable(_) => 3,
            BridgeError::NamespaceUnavailable { .. } => 4,
            BridgeError::MissingArgument => 5,
            BridgeError::NotFound(_) => 6,
        }
    }
}

impl From<&BridgeError> for ExitCode {
    fn from(err: &BridgeError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

impl From<io::Error> for BridgeError {
    fn from(err: io::Error) -> Self {
        BridgeError::Unexpected(format!("output error: {err}"))
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for BridgeError {
    fn from(err: windows::core::Error) -> Self {
        BridgeError::Unexpected(err.to_string())
    }
}
