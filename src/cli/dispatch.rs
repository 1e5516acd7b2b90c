// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use clap::CommandFactory;
use std::path::Path;

use crate::config::GateConfig;
use crate::error::{ConfigError, GateError, InputError, Result, ResultExt};
use crate::hooks::{HookManager, HookStatus};
use crate::rules::Validator;

use super::args::{Cli, Commands, HookAction, HookArgs, InitArgs};

/// How a run ended when no operational error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded (or the message was valid).
    Success,
    /// The message broke a rule.
    Rejected,
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<Outcome> {
    if cli.no_color {
        disable_colors();
    }

    match &cli.command {
        Some(Commands::Hook(args)) => run_hook(args),
        Some(Commands::Init(args)) => run_init(args, Path::new("commitgate.toml")),
        Some(Commands::Version) => run_version(),
        None => run_validate(&cli),
    }
}

fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

/// Load configuration, honoring `--config`.
fn load_config(cli: &Cli) -> Result<GateConfig> {
    if let Some(config_path) = &cli.config {
        GateConfig::load_from(config_path)
    } else {
        GateConfig::load()
    }
}

/// Validate the message named by the arguments.
fn run_validate(cli: &Cli) -> Result<Outcome> {
    let Some(source) = cli.message_source() else {
        Cli::command().print_help()?;
        return Err(GateError::Input(InputError::MissingMessage));
    };

    let config = load_config(cli)?;
    if !config.ui.color {
        disable_colors();
    }

    tracing::debug!("Validating message from {:?}", source);

    let message = source.read()?;
    let result = Validator::new(config.rules.clone()).validate(&message);
    result.print(cli.format, config.ui.emoji);

    if result.is_valid() {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Rejected)
    }
}

/// Run the hook command.
fn run_hook(args: &HookArgs) -> Result<Outcome> {
    tracing::debug!("Running hook command: {:?}", args.action);

    let manager = HookManager::new()?;

    match args.action {
        HookAction::Install { force } => {
            manager.install(force)?;
            println!("✓ Installed commit-msg hook");
        }
        HookAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled commit-msg hook");
        }
        HookAction::Status => {
            let line = match manager.status()? {
                HookStatus::Installed => "✓ commit-msg (commitgate)",
                HookStatus::Foreign => "✗ commit-msg (installed by another tool)",
                HookStatus::NotInstalled => "✗ commit-msg (not installed)",
            };
            println!("{}", line);
        }
    }

    Ok(Outcome::Success)
}

/// Run the init command.
fn run_init(args: &InitArgs, config_path: &Path) -> Result<Outcome> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    if config_path.exists() && !args.force {
        return Err(GateError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created {}", config_path.display());

    Ok(Outcome::Success)
}

/// Run the version command.
fn run_version() -> Result<Outcome> {
    println!("commitgate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_example() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commitgate.toml");

        let outcome = run_init(&InitArgs { force: false }, &path).unwrap();
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            crate::config::example_config()
        );
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commitgate.toml");
        std::fs::write(&path, "[rules]\n").unwrap();

        assert!(matches!(
            run_init(&InitArgs { force: false }, &path),
            Err(GateError::Config(ConfigError::AlreadyExists { .. }))
        ));

        run_init(&InitArgs { force: true }, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            crate::config::example_config()
        );
    }
}
