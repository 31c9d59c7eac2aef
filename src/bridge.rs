//! List and invoke operations over any [`ShellNamespace`].

use std::io::Write;

use tracing::debug;

use crate::errors::{BridgeError, Result};
use crate::namespace::{listable_name, ShellNamespace};

/// Display names of the namespace in enumeration order.
///
/// Entries whose name is empty, whitespace only or unreadable are skipped.
/// Names are neither sorted nor deduplicated.
pub fn list_names<B: ShellNamespace>(backend: &B) -> Result<Vec<String>> {
    let handle = backend.resolve_namespace()?;
    let entries = backend.list_entries(&handle)?;
    let total = entries.len();

    let names: Vec<String> = entries.iter().filter_map(listable_name).collect();
    debug!(total, listed = names.len(), "namespace enumerated");
    Ok(names)
}

/// Writes one display name per line to `out` and returns how many were written.
pub fn write_names<B: ShellNamespace, W: Write>(backend: &B, out: &mut W) -> Result<usize> {
    let names = list_names(backend)?;
    for name in &names {
        writeln!(out, "{name}")?;
    }
    out.flush()?;
    Ok(names.len())
}

/// Invokes the default verb of the first entry whose name matches `target`
/// case-insensitively. Returns the matched display name.
pub fn invoke_by_name<B: ShellNamespace>(backend: &B, target: &str) -> Result<String> {
    if target.trim().is_empty() {
        return Err(BridgeError::MissingArgument);
    }

    let handle = backend.resolve_namespace()?;
    for entry in backend.list_entries(&handle)? {
        let Some(name) = listable_name(&entry) else {
            continue;
        };
        if names_match(&name, target) {
            debug!(%name, "invoking namespace entry");
            backend.invoke(&entry)?;
            return Ok(name);
        }
    }

    Err(BridgeError::NotFound(target.to_string()))
}

/// Ordinal comparison after per-character lowercasing; independent of locale.
pub fn names_match(name: &str, target: &str) -> bool {
    name.chars()
        .flat_map(char::to_lowercase)
        .eq(target.chars().flat_map(char::to_lowercase))
}
