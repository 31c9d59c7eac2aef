//! `Shell.Application` backend built on `windows-rs`.

use std::marker::PhantomData;

use windows::core::{BSTR, VARIANT};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_INPROC_SERVER,
    COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Shell::{Folder, FolderItem, IShellDispatch, Shell as ShellApplication};

use super::{NamespaceEntry, ShellNamespace};
use crate::errors::{BridgeError, Result};

/// Keeps a single-threaded COM apartment open for the current thread.
pub struct ComGuard {
    // COM apartments are per thread.
    _not_send: PhantomData<*const ()>,
}

impl ComGuard {
    pub fn new() -> windows::core::Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) }.ok()?;
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

pub struct ComEntry {
    item: FolderItem,
}

impl NamespaceEntry for ComEntry {
    fn display_name(&self) -> Option<String> {
        unsafe { self.item.Name() }
            .ok()
            .map(|name| name.to_string())
    }
}

/// Resolves namespaces through the shell automation object.
pub struct ComShellNamespace {
    namespace: String,
    apartment: Option<ComGuard>,
}

impl ComShellNamespace {
    pub fn new(namespace: impl Into<String>) -> Self {
        let apartment = match ComGuard::new() {
            Ok(guard) => Some(guard),
            Err(err) => {
                tracing::debug!(error = %err, "COM apartment initialisation failed");
                None
            }
        };
        Self {
            namespace: namespace.into(),
            apartment,
        }
    }

    fn shell(&self) -> Result<IShellDispatch> {
        if self.apartment.is_none() {
            return Err(BridgeError::AutomationUnavailable(
                "COM could not be initialised on this thread".to_string(),
            ));
        }
        unsafe { CoCreateInstance(&ShellApplication, None, CLSCTX_INPROC_SERVER) }
            .map_err(|err| BridgeError::AutomationUnavailable(err.to_string()))
    }
}

impl ShellNamespace for ComShellNamespace {
    type Handle = Folder;
    type Entry = ComEntry;

    fn resolve_namespace(&self) -> Result<Folder> {
        let shell = self.shell()?;
        tracing::debug!(namespace = %self.namespace, "requesting shell namespace");

        let location = VARIANT::from(BSTR::from(self.namespace.as_str()));
        unsafe { shell.NameSpace(&location) }.map_err(|err| {
            BridgeError::NamespaceUnavailable {
                namespace: self.namespace.clone(),
                reason: err.to_string(),
            }
        })
    }

    fn list_entries(&self, handle: &Folder) -> Result<Vec<ComEntry>> {
        let items = unsafe { handle.Items() }?;
        let count = unsafe { items.Count() }?;
        tracing::debug!(count, "enumerating namespace items");

        let mut entries = Vec::with_capacity(usize::try_from(count).unwrap_or_default());
        for index in 0..count {
            let item = unsafe { items.Item(&VARIANT::from(index)) }?;
            entries.push(ComEntry { item });
        }
        Ok(entries)
    }

    fn invoke(&self, entry: &ComEntry) -> Result<()> {
        // An empty verb selects the item's default action.
        unsafe { entry.item.InvokeVerb(&VARIANT::default()) }?;
        Ok(())
    }
}
