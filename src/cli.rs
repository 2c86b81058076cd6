// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use docs_indexer::config::Pipeline;
use docs_indexer::project::LONG_VERSION;

/// docs-indexer - content indexing for the docs search engine
#[derive(Parser, Debug)]
#[command(name = "docs-indexer")]
#[command(author, version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Pipeline selector for `config --check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliPipeline {
    /// Documentation pages from a git repository
    Docs,
    /// Blog posts from HubSpot
    Blog,
}

impl From<CliPipeline> for Pipeline {
    fn from(value: CliPipeline) -> Self {
        match value {
            CliPipeline::Docs => Pipeline::Docs,
            CliPipeline::Blog => Pipeline::Blog,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print name, version, git revision, description and source URL
    #[command(visible_aliases = ["info"])]
    Version,

    /// Show the resolved configuration (secrets masked)
    Config {
        /// Config file to read instead of the default locations
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Validate the settings a pipeline needs; exits non-zero if invalid
        #[arg(long, value_enum)]
        check: Option<CliPipeline>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn info_alias_and_global_flags_parse() {
        let cli = Cli::try_parse_from(["docs-indexer", "info", "--format", "json", "--compact"])
            .expect("parse info alias");
        assert!(matches!(cli.command, Commands::Version));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.compact);
        assert!(!cli.verbose);
    }

    #[test]
    fn config_check_parses() {
        let cli = Cli::try_parse_from([
            "docs-indexer",
            "-v",
            "config",
            "--check",
            "docs",
            "-c",
            "custom.toml",
        ])
        .expect("parse config");

        match cli.command {
            Commands::Config { config, check } => {
                assert_eq!(config, Some(PathBuf::from("custom.toml")));
                assert_eq!(check, Some(CliPipeline::Docs));
                assert_eq!(Pipeline::from(CliPipeline::Docs), Pipeline::Docs);
            }
            other => panic!("expected config command, got {other:?}"),
        }
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_pipeline_is_rejected() {
        assert!(Cli::try_parse_from(["docs-indexer", "config", "--check", "wiki"]).is_err());
    }
}
