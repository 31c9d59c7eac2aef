/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

/// Text shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CPANEL_BRIDGE_BUILD_HASH"),
    ", ",
    env!("CPANEL_BRIDGE_BUILD_STATUS"),
    ")\nbuilt ",
    env!("CPANEL_BRIDGE_BUILD_TIMESTAMP"),
    " for ",
    env!("CPANEL_BRIDGE_BUILD_TARGET"),
    " [",
    env!("CPANEL_BRIDGE_BUILD_PROFILE"),
    "]\n",
    env!("CPANEL_BRIDGE_BUILD_RUSTC"),
);

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("CPANEL_BRIDGE_BUILD_HASH"),
        git_status: env!("CPANEL_BRIDGE_BUILD_STATUS"),
        timestamp: env!("CPANEL_BRIDGE_BUILD_TIMESTAMP"),
        target: env!("CPANEL_BRIDGE_BUILD_TARGET"),
        profile: env!("CPANEL_BRIDGE_BUILD_PROFILE"),
        rustc: env!("CPANEL_BRIDGE_BUILD_RUSTC"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_starts_with_the_package_version() {
        let meta = current();

        assert!(LONG_VERSION.starts_with(meta.version));
        assert!(LONG_VERSION.contains(meta.target));
    }
}
