use std::process::ExitCode;

fn main() -> ExitCode {
    cpanel_bridge::cli::run_cli()
}
