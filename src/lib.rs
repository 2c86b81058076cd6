// SPDX-License-Identifier: MIT OR Apache-2.0

//! docs-indexer - content indexing for the docs search engine
//!
//! Shared modules for the docs-indexer CLI.

pub mod config;
pub mod errors;
pub mod logging;
pub mod output;
pub mod project;

pub use project::ProjectMetadata;
