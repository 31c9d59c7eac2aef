use assert_cmd::Command;

pub const BIN_NAME: &str = "cpanel_bridge";

/// Command for the built binary with an isolated environment.
pub fn bridge_command() -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env_remove("RUST_LOG")
        .env_remove("CPANEL_BRIDGE_NAMESPACE")
        .env_remove("CPANEL_BRIDGE_TEST_ENTRIES")
        .env_remove("CPANEL_BRIDGE_TEST_FAIL")
        .env_remove("CPANEL_BRIDGE_TEST_LOG");
    cmd
}

/// Command backed by a scripted namespace holding `entries`.
pub fn scripted_command(entries: &str) -> Command {
    let mut cmd = bridge_command();
    cmd.env("CPANEL_BRIDGE_TEST_ENTRIES", entries);
    cmd
}
