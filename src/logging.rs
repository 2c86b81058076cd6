// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracing subscriber setup
//!
//! Logs go to stderr so JSON written to stdout stays parseable.
//! `RUST_LOG` sets the filter (default `info`), `LOG_FORMAT=json` switches
//! to JSON lines.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::project::ProjectMetadata;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Install the global subscriber. `verbose` forces debug level regardless
/// of `RUST_LOG`. Fails if a global subscriber is already installed.
pub fn init(format: LogFormat, verbose: bool) -> Result<(), TryInitError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
}

/// Startup line identifying the build
pub fn log_startup(meta: &ProjectMetadata) {
    tracing::info!(
        service = meta.name(),
        version = %meta.long_version(),
        git_sha = meta.git_sha(),
        "starting {}",
        meta.name()
    );
}
