pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Log directive for a `-v` count: warn, info, debug, then trace.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "cpanel_bridge=warn",
        1 => "cpanel_bridge=info",
        2 => "cpanel_bridge=debug",
        _ => "cpanel_bridge=trace",
    }
}

/// Installs the global tracing subscriber, writing to stderr so stdout only
/// carries command output. `RUST_LOG` takes precedence over `verbosity`.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .try_init();
    });
}
