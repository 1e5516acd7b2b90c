// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::input::MessageSource;

/// commitgate - Conventional Commits gate
///
/// Checks a commit message against the Conventional Commits convention.
/// Pass the message with --message, or the path of a file holding it (as
/// git does for the commit-msg hook).
#[derive(Parser, Debug)]
#[command(name = "commitgate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional Commits gate for commit-msg hooks", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Management command (validates a message if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to commit message file (used in git hooks)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Commit message string to validate
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Validate the message of an existing commit
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage the commit-msg hook
    Hook(HookArgs),

    /// Write a commented commitgate.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the hook command.
#[derive(Parser, Debug, Clone)]
pub struct HookArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HookAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HookAction {
    /// Install the commit-msg hook
    Install {
        /// Replace an existing hook (it is kept as a backup)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// The message source chosen from the arguments, if any.
    pub fn message_source(&self) -> Option<MessageSource> {
        MessageSource::select(self.message.clone(), self.file.clone(), self.rev.clone())
    }
}
