//! In-memory namespace driven by environment variables.
//!
//! Lets the binary be exercised end to end without a Windows shell:
//! `CPANEL_BRIDGE_TEST_ENTRIES` holds `|`-separated display names, where
//! `<unreadable>` stands for an item whose name cannot be read.
//! `CPANEL_BRIDGE_TEST_FAIL` (`automation` or `namespace`) fails resolution,
//! and every invocation is appended to the file named by
//! `CPANEL_BRIDGE_TEST_LOG`.

use std::{
    cell::RefCell,
    env,
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    str::FromStr,
};

use super::{NamespaceEntry, ShellNamespace};
use crate::errors::{BridgeError, Result};

pub const ENTRIES_VAR: &str = "CPANEL_BRIDGE_TEST_ENTRIES";
pub const FAIL_VAR: &str = "CPANEL_BRIDGE_TEST_FAIL";
pub const LOG_VAR: &str = "CPANEL_BRIDGE_TEST_LOG";

const UNREADABLE: &str = "<unreadable>";

/// Resolution step a scripted namespace is told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedFailure {
    Automation,
    Namespace,
}

impl FromStr for ScriptedFailure {
    type Err = BridgeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "automation" => Ok(Self::Automation),
            "namespace" => Ok(Self::Namespace),
            other => Err(BridgeError::Unexpected(format!(
                "{FAIL_VAR} must be `automation` or `namespace`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedEntry {
    name: Option<String>,
}

impl NamespaceEntry for ScriptedEntry {
    fn display_name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[derive(Debug)]
pub struct ScriptedNamespace {
    namespace: String,
    entries: Vec<Option<String>>,
    failure: Option<ScriptedFailure>,
    log_path: Option<PathBuf>,
    invoked: RefCell<Vec<String>>,
}

impl ScriptedNamespace {
    pub fn new<I, S>(namespace: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            namespace: namespace.into(),
            entries: entries
                .into_iter()
                .map(|entry| entry.map(Into::into))
                .collect(),
            failure: None,
            log_path: None,
            invoked: RefCell::new(Vec::new()),
        }
    }

    /// Builds a namespace from the environment, or `None` when
    /// [`ENTRIES_VAR`] is not set.
    pub fn from_env(namespace: &str) -> Result<Option<Self>> {
        let Ok(raw) = env::var(ENTRIES_VAR) else {
            return Ok(None);
        };

        let mut scripted = Self::new(namespace, parse_entries(&raw));
        if let Ok(failure) = env::var(FAIL_VAR) {
            scripted = scripted.with_failure(failure.parse()?);
        }
        if let Some(path) = env::var_os(LOG_VAR) {
            scripted.log_path = Some(PathBuf::from(path));
        }
        Ok(Some(scripted))
    }

    pub fn with_failure(mut self, failure: ScriptedFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Names passed to [`ShellNamespace::invoke`], in call order.
    pub fn invocations(&self) -> Vec<String> {
        self.invoked.borrow().clone()
    }

    fn record(&self, name: &str) -> Result<()> {
        self.invoked.borrow_mut().push(name.to_string());
        if let Some(path) = &self.log_path {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{name}")?;
        }
        Ok(())
    }
}

fn parse_entries(raw: &str) -> Vec<Option<String>> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('|')
        .map(|name| (name != UNREADABLE).then(|| name.to_string()))
        .collect()
}

impl ShellNamespace for ScriptedNamespace {
    type Handle = ();
    type Entry = ScriptedEntry;

    fn resolve_namespace(&self) -> Result<()> {
        match self.failure {
            Some(ScriptedFailure::Automation) => Err(BridgeError::AutomationUnavailable(
                "scripted automation failure".to_string(),
            )),
            Some(ScriptedFailure::Namespace) => Err(BridgeError::NamespaceUnavailable {
                namespace: self.namespace.clone(),
                reason: "scripted namespace failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn list_entries(&self, _handle: &()) -> Result<Vec<ScriptedEntry>> {
        Ok(self
            .entries
            .iter()
            .map(|name| ScriptedEntry { name: name.clone() })
            .collect())
    }

    fn invoke(&self, entry: &ScriptedEntry) -> Result<()> {
        self.record(entry.name.as_deref().unwrap_or(UNREADABLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries_keeps_order_blanks_and_unreadable_items() {
        let entries = parse_entries("Mouse||<unreadable>| |Sound");

        assert_eq!(
            entries,
            vec![
                Some("Mouse".to_string()),
                Some(String::new()),
                None,
                Some(" ".to_string()),
                Some("Sound".to_string()),
            ]
        );
    }

    #[test]
    fn empty_variable_means_empty_namespace() {
        assert!(parse_entries("").is_empty());
    }

    #[test]
    fn failure_kind_parses_case_insensitively() {
        assert_eq!(
            "Namespace".parse::<ScriptedFailure>().unwrap(),
            ScriptedFailure::Namespace
        );
        assert_eq!(
            " automation ".parse::<ScriptedFailure>().unwrap(),
            ScriptedFailure::Automation
        );
        assert!("network".parse::<ScriptedFailure>().is_err());
    }

    #[test]
    fn scripted_failures_map_to_resolution_errors() {
        let automation = ScriptedNamespace::new("ns", [Some("A")])
            .with_failure(ScriptedFailure::Automation)
            .resolve_namespace()
            .unwrap_err();
        let namespace = ScriptedNamespace::new("ns", [Some("A")])
            .with_failure(ScriptedFailure::Namespace)
            .resolve_namespace()
            .unwrap_err();

        assert_eq!(automation.exit_code(), 3);
        assert_eq!(namespace.exit_code(), 4);
        assert!(namespace.to_string().contains("ns"));
    }

    #[test]
    fn invocations_are_appended_to_the_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("invoked.log");
        let mut scripted = ScriptedNamespace::new("ns", [Some("Mouse"), Some("Sound")]);
        scripted.log_path = Some(log.clone());

        let entries = scripted.list_entries(&()).expect("entries");
        scripted.invoke(&entries[1]).expect("invoke");
        scripted.invoke(&entries[0]).expect("invoke");

        assert_eq!(scripted.invocations(), vec!["Sound", "Mouse"]);
        let contents = std::fs::read_to_string(&log).expect("read log");
        assert_eq!(contents, "Sound\nMouse\n");
    }
}
