// SPDX-License-Identifier: MIT OR Apache-2.0

//! docs-indexer - content indexing for the docs search engine
//!
//! Command line entry point: build metadata, configuration inspection
//! and shell completions.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use docs_indexer::logging::{self, LogFormat};
use docs_indexer::project::ProjectMetadata;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogFormat::from_env(), cli.verbose).context("failed to install logger")?;

    let meta = ProjectMetadata::current();
    logging::log_startup(&meta);

    match cli.command {
        Commands::Version => {
            commands::version::run(&meta, cli.format, cli.compact)?;
        }
        Commands::Config { config, check } => {
            commands::config::run(config.as_deref(), check.map(Into::into), cli.format, cli.compact)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, meta.name(), &mut std::io::stdout());
        }
    }

    Ok(())
}
