use std::convert::Infallible;

use super::{NamespaceEntry, ShellNamespace};
use crate::errors::{BridgeError, Result};

/// Stand-in for platforms without Windows shell automation.
#[derive(Debug, Default)]
pub struct UnsupportedNamespace;

impl UnsupportedNamespace {
    pub fn new(_namespace: impl Into<String>) -> Self {
        Self
    }
}

impl NamespaceEntry for Infallible {
    fn display_name(&self) -> Option<String> {
        match *self {}
    }
}

impl ShellNamespace for UnsupportedNamespace {
    type Handle = Infallible;
    type Entry = Infallible;

    fn resolve_namespace(&self) -> Result<Infallible> {
        Err(BridgeError::AutomationUnavailable(format!(
            "Shell.Application is not available on {}",
            std::env::consts::OS
        )))
    }

    fn list_entries(&self, handle: &Infallible) -> Result<Vec<Infallible>> {
        match *handle {}
    }

    fn invoke(&self, entry: &Infallible) -> Result<()> {
        match *entry {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_reports_missing_automation() {
        let err = UnsupportedNamespace::new("shell:::{x}")
            .resolve_namespace()
            .unwrap_err();

        assert_eq!(err.exit_code(), 3);
    }
}
