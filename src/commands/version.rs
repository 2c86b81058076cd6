// SPDX-License-Identifier: MIT OR Apache-2.0

//! `version` command: build metadata.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use docs_indexer::output::print_json;
use docs_indexer::project::ProjectMetadata;

pub fn run(meta: &ProjectMetadata, format: OutputFormat, compact: bool) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (label, value) in text_rows(meta) {
                println!("{:<12} {}", format!("{label}:").bold(), value);
            }
        }
        OutputFormat::Json => print_json(meta, compact)?,
    }
    Ok(())
}

fn text_rows(meta: &ProjectMetadata) -> [(&'static str, &'static str); 5] {
    [
        ("Name", meta.name()),
        ("Version", meta.version()),
        ("Git SHA", meta.git_sha()),
        ("Description", meta.description()),
        ("Source", meta.source()),
    ]
}
