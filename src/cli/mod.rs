pub mod output;

use std::{ffi::OsString, io, process::ExitCode};

use clap::{ArgAction, Parser};
use tracing::{debug, info, warn};

use crate::bridge;
use crate::errors::{BridgeError, Result};
use crate::namespace::{
    scripted::{self, ScriptedNamespace},
    PlatformNamespace, ShellNamespace, CONTROL_PANEL_NAMESPACE,
};
use crate::utils::build_info;

/// Lists the items of the All Control Panel Items folder, or opens one by name.
#[derive(Debug, Parser)]
#[command(name = "cpanel_bridge", version, long_version = build_info::LONG_VERSION)]
pub struct Cli {
    /// Open the item with this display name (case-insensitive) instead of listing
    #[arg(long, value_name = "NAME", num_args = 0..=1)]
    invoke: Option<Option<String>>,

    /// Shell namespace to read
    #[arg(
        long,
        value_name = "ID",
        env = "CPANEL_BRIDGE_NAMESPACE",
        default_value = CONTROL_PANEL_NAMESPACE
    )]
    namespace: String,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Invoke(String),
}

impl Cli {
    pub fn command(&self) -> Result<Command> {
        match &self.invoke {
            None => Ok(Command::List),
            Some(Some(name)) if !name.trim().is_empty() => Ok(Command::Invoke(name.clone())),
            Some(_) => Err(BridgeError::MissingArgument),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn run_cli() -> ExitCode {
    run_with_args(std::env::args_os())
}

pub fn run_with_args<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    crate::init(cli.verbosity());
    debug!(build = ?build_info::current(), "starting");

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(exit_code = err.exit_code(), "command failed");
            output::report(&err);
            ExitCode::from(&err)
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let command = cli.command()?;

    if let Some(backend) = ScriptedNamespace::from_env(cli.namespace())? {
        warn!(
            "using scripted namespace from {} instead of the shell",
            scripted::ENTRIES_VAR
        );
        return dispatch(&backend, &command);
    }

    let platform = PlatformNamespace::new(cli.namespace());
    dispatch(&platform, &command)
}

fn dispatch<B: ShellNamespace>(backend: &B, command: &Command) -> Result<()> {
    match command {
        Command::List => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let count = bridge::write_names(backend, &mut out)?;
            info!(count, "listed namespace items");
        }
        Command::Invoke(target) => {
            let name = bridge::invoke_by_name(backend, target)?;
            info!(%name, "invoked namespace item");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cpanel_bridge").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn no_arguments_selects_list_mode() {
        assert_eq!(parse(&[]).command().unwrap(), Command::List);
    }

    #[test]
    fn invoke_with_name_selects_invoke_mode() {
        assert_eq!(
            parse(&["--invoke", "Device Manager"]).command().unwrap(),
            Command::Invoke("Device Manager".into())
        );
    }

    #[test]
    fn invoke_without_name_is_a_missing_argument() {
        let err = parse(&["--invoke"]).command().unwrap_err();

        assert!(matches!(err, BridgeError::MissingArgument));
    }

    #[test]
    fn invoke_with_blank_name_is_a_missing_argument() {
        let err = parse(&["--invoke", "  "]).command().unwrap_err();

        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn namespace_can_be_overridden() {
        let cli = parse(&["--namespace", "shell:::{ED7BA470-8E54-465E-825C-99712043E01C}"]);

        assert_eq!(cli.namespace(), "shell:::{ED7BA470-8E54-465E-825C-99712043E01C}");
    }

    #[test]
    fn verbose_flag_counts_occurrences() {
        assert_eq!(parse(&["-vv"]).verbosity(), 2);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["cpanel_bridge", "--open", "Mouse"]).is_err());
    }
}
