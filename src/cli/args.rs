// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Comet - Interactive Conventional Commit Assistant
///
/// Turns a few answers into a well-formed conventional commit.
#[derive(Parser, Debug)]
#[command(name = "comet")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Interactive conventional commit assistant", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to commit if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show what would be committed without actually committing
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive commit creation (default command)
    Commit(CommitArgs),

    /// Write a default .cometrc to the repository root
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Pre-fill the commit type
    #[arg(short = 't', long)]
    pub r#type: Option<String>,

    /// Pre-fill the scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Pre-fill the title
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Pre-fill the body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Pre-fill the ticket / issue reference
    #[arg(long)]
    pub ticket: Option<String>,

    /// Mark as breaking change
    #[arg(long)]
    pub breaking: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Commit if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Commit(CommitArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commit() {
        let args = Cli::parse_from(["comet", "commit", "-t", "feat", "-s", "app"]);
        if let Some(Commands::Commit(commit_args)) = args.command {
            assert_eq!(commit_args.r#type.as_deref(), Some("feat"));
            assert_eq!(commit_args.scope.as_deref(), Some("app"));
        } else {
            panic!("Expected Commit command");
        }
    }

    #[test]
    fn test_parse_init() {
        let args = Cli::parse_from(["comet", "init", "--force"]);
        assert!(matches!(args.command, Some(Commands::Init(InitArgs { force: true }))));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["comet", "--dry-run", "--debug"]);
        assert!(args.dry_run);
        assert!(args.debug);
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["comet"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Commit(_)));
    }

    #[test]
    fn test_parse_breaking_and_yes() {
        let args = Cli::parse_from(["comet", "commit", "--breaking", "-y"]);
        if let Some(Commands::Commit(commit_args)) = args.command {
            assert!(commit_args.breaking);
            assert!(commit_args.yes);
        } else {
            panic!("Expected Commit command");
        }
    }
}
