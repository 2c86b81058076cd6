// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared output helpers

use anyhow::Result;
use serde::Serialize;

/// Render a value as JSON, pretty-printed unless `compact` is set
pub fn to_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}

/// Print a value as JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    println!("{}", to_json(value, compact)?);
    Ok(())
}
