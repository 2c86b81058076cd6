// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Configuration problems name the environment variable to fix.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "{var} is not set\n\n\
         Suggestion: export {var} before running docs-indexer,\n\
         or set `{field}` in docs-indexer.toml"
    )]
    Missing {
        var: &'static str,
        field: &'static str,
    },

    #[error(
        "{var} is not a valid http(s) URL: '{value}' ({reason})\n\n\
         Example: {var}=http://localhost:9200/"
    )]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(
        "REPOSITORY_HANDLE must look like 'owner/name', got '{0}'\n\n\
         Example: REPOSITORY_HANDLE=giantswarm/docs"
    )]
    InvalidRepositoryHandle(String),

    #[error(
        "INDEX_NAME '{name}' is not a valid index name: {reason}\n\n\
         Index names are lowercase and must not contain \\ / * ? \" < > | , # : or spaces"
    )]
    InvalidIndexName { name: String, reason: &'static str },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
