#![doc(test(attr(deny(warnings))))]

//! Lists the items of the Windows "All Control Panel Items" shell folder and
//! opens them by display name.

pub mod bridge;
pub mod cli;
pub mod errors;
pub mod namespace;
pub mod utils;

pub use errors::BridgeError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs tracing for the given `-v` count. Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(verbosity);
        tracing::debug!("cpanel_bridge tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init(0);
        super::init(2);
    }
}
