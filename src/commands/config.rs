// SPDX-License-Identifier: MIT OR Apache-2.0

//! `config` command: resolved settings and per-pipeline validation.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::cli::OutputFormat;
use docs_indexer::config::{Config, Pipeline, RedactedConfig};
use docs_indexer::output::print_json;

#[derive(Debug, Serialize)]
struct ConfigReport<'a> {
    config: RedactedConfig<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check: Option<CheckReport>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    pipeline: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn pipeline_name(pipeline: Pipeline) -> &'static str {
    match pipeline {
        Pipeline::Docs => "docs",
        Pipeline::Blog => "blog",
    }
}

pub fn run(
    config_path: Option<&Path>,
    check: Option<Pipeline>,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let config = Config::load(config_path).context("failed to load configuration")?;
    if let Some(path) = config.source_file.as_ref() {
        tracing::debug!(path = %path.display(), "loaded config file");
    }

    let outcome = check.map(|pipeline| (pipeline, config.check(pipeline)));
    let report = ConfigReport {
        config: config.redacted(),
        check: outcome.as_ref().map(|(pipeline, result)| CheckReport {
            pipeline: pipeline_name(*pipeline),
            ok: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
        }),
    };

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => print_json(&report, compact)?,
    }

    if let Some((pipeline, Err(err))) = outcome {
        return Err(err).with_context(|| {
            format!("{} pipeline is not configured", pipeline_name(pipeline))
        });
    }
    Ok(())
}

fn print_text(report: &ConfigReport<'_>) {
    let c = &report.config;
    let unset = || "(unset)".dimmed().to_string();
    let opt = |value: Option<&str>| value.map(str::to_string).unwrap_or_else(unset);

    println!("{}", "Configuration".bold());
    if let Some(file) = c.source_file.as_deref() {
        println!("  config file:            {}", file);
    }
    println!("  elasticsearch_endpoint: {}", c.elasticsearch_endpoint);
    println!("  repository_handle:      {}", opt(c.repository_handle));
    println!("  repository_url:         {}", opt(c.repository_url.as_deref()));
    println!("  repository_branch:      {}", c.repository_branch);
    println!("  repository_subfolder:   {}", opt(c.repository_subfolder));
    println!("  github_token:           {}", opt(c.github_token));
    println!("  index_name:             {}", opt(c.index_name));
    println!("  workdir:                {}", c.workdir);
    println!("  source_path:            {}", c.source_path);
    println!("  hubspot_access_token:   {}", opt(c.hubspot_access_token));
    println!("  apidocs_enabled:        {}", c.apidocs_enabled);
    println!("  apidocs_base_uri:       {}", opt(c.apidocs_base_uri));
    println!("  apidocs_base_path:      {}", opt(c.apidocs_base_path));
    if c.api_spec_files.is_empty() {
        println!("  api_spec_files:         {}", unset());
    } else {
        println!("  api_spec_files:         {}", c.api_spec_files.join(", "));
    }

    if let Some(check) = report.check.as_ref() {
        if check.ok {
            println!("{} {} pipeline configuration is valid", "✓".green(), check.pipeline);
        } else {
            println!("{} {} pipeline configuration is invalid", "✗".red(), check.pipeline);
        }
    }
}
