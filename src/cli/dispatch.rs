// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::PathBuf;

use crate::commit::CommitFlow;
use crate::config::{self, Config};
use crate::error::{CometError, ConfigError, Result};
use crate::git::Repository;

use super::args::{Cli, Commands};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Commit(args) => run_commit(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the commit command.
fn run_commit(cli: &Cli, args: super::args::CommitArgs) -> Result<()> {
    tracing::debug!("Running commit command with args: {:?}", args);

    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load()?
    };

    let mut flow = CommitFlow::new(config);

    if let Some(ref t) = args.r#type {
        flow = flow.with_type(t)?;
    }
    if let Some(ref scope) = args.scope {
        flow = flow.with_scope(scope);
    }
    if let Some(ref message) = args.message {
        flow = flow.with_title(message);
    }
    if let Some(ref body) = args.body {
        flow = flow.with_body(body);
    }
    if let Some(ref ticket) = args.ticket {
        flow = flow.with_ticket(ticket);
    }
    if args.breaking {
        flow = flow.with_breaking(true);
    }

    flow.run(cli.dry_run, args.yes)
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let root = Repository::open_current()
        .map(|repo| repo.workdir().to_path_buf())
        .unwrap_or_else(|_| PathBuf::from("."));
    let config_path = root.join(config::CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(CometError::Config(ConfigError::AlreadyExists {
            path: config_path,
        }));
    }

    std::fs::write(&config_path, config::default::example_config())?;

    println!("✓ Created {}", config_path.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("comet {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
