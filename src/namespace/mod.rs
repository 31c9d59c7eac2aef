//! Adapter boundary between the CLI and the platform shell namespace.
//!
//! Everything that talks to the shell automation surface lives behind
//! [`ShellNamespace`]; the rest of the crate only sees display names and an
//! opaque invoke capability.

#[cfg(windows)]
pub mod com;
pub mod scripted;
#[cfg(not(windows))]
pub mod unsupported;

use crate::errors::Result;

/// `shell:` path of the "All Control Panel Items" virtual folder.
pub const CONTROL_PANEL_NAMESPACE: &str = "shell:::{21EC2020-3AEA-1069-A2DD-08002B30309D}";

/// A transient view over one item of a resolved namespace.
pub trait NamespaceEntry {
    /// Display name as reported by the platform, `None` when it cannot be read.
    fn display_name(&self) -> Option<String>;
}

/// Narrow interface over a shell namespace provider.
pub trait ShellNamespace {
    type Handle;
    type Entry: NamespaceEntry;

    /// Obtains the automation root and then the namespace folder.
    fn resolve_namespace(&self) -> Result<Self::Handle>;

    /// Entries of the namespace, in the order the platform enumerates them.
    fn list_entries(&self, handle: &Self::Handle) -> Result<Vec<Self::Entry>>;

    /// Triggers the default verb of `entry`.
    fn invoke(&self, entry: &Self::Entry) -> Result<()>;
}

/// Returns the usable name of `entry`, skipping blank and unreadable names.
pub fn listable_name<E: NamespaceEntry>(entry: &E) -> Option<String> {
    entry
        .display_name()
        .filter(|name| !name.trim().is_empty())
}

/// Backend compiled in for the current platform.
#[cfg(windows)]
pub type PlatformNamespace = com::ComShellNamespace;
#[cfg(not(windows))]
pub type PlatformNamespace = unsupported::UnsupportedNamespace;

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(Option<&'static str>);

    impl NamespaceEntry for Named {
        fn display_name(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn blank_and_unreadable_names_are_not_listable() {
        assert_eq!(listable_name(&Named(None)), None);
        assert_eq!(listable_name(&Named(Some(""))), None);
        assert_eq!(listable_name(&Named(Some(" \t "))), None);
    }

    #[test]
    fn listable_names_are_returned_verbatim() {
        assert_eq!(
            listable_name(&Named(Some(" Mouse "))),
            Some(" Mouse ".to_string())
        );
    }
}
