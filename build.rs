// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolves the git revision the binary is built from.
//!
//! Emits `VERGEN_GIT_SHA` for `env!()`. The value is always set: the
//! override, the commit vergen-gix reads from the repository, or `n/a`.

#[path = "build_support/git_sha.rs"]
mod git_sha;

use std::env;
use std::path::Path;

use vergen_gix::{Emitter, GixBuilder};

use git_sha::{find_repo_root, head_watch_paths, normalize_sha, FALLBACK_SHA, OVERRIDE_VAR};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build_support/git_sha.rs");
    println!("cargo:rerun-if-env-changed={OVERRIDE_VAR}");

    // CI and packagers can pin the SHA without any git probing.
    if let Some(sha) = env::var(OVERRIDE_VAR)
        .ok()
        .and_then(|raw| normalize_sha(&raw))
    {
        emit_sha(&sha);
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let Some(repo_root) = find_repo_root(Path::new(&manifest_dir)) else {
        emit_sha(FALLBACK_SHA);
        return;
    };

    for path in head_watch_paths(&repo_root) {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(false) // full SHA
        .dirty(false)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=docs-indexer: vergen-gix config failed: {err}");
            emit_sha(FALLBACK_SHA);
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|e| e.emit())
    {
        println!("cargo:warning=docs-indexer: vergen-gix emit failed: {err}");
        emit_sha(FALLBACK_SHA);
    }
}

fn emit_sha(sha: &str) {
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}
