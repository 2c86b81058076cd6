// SPDX-License-Identifier: MIT OR Apache-2.0

//! Git SHA helpers shared by the build script and its tests.

use std::path::{Path, PathBuf};

/// Environment variable CI and packagers use to pin the SHA.
pub const OVERRIDE_VAR: &str = "DOCS_INDEXER_GIT_SHA";

/// Value emitted when no revision can be determined.
pub const FALLBACK_SHA: &str = "n/a";

/// Accept 7 to 40 hex digits, lowercased. Anything else is rejected.
pub fn normalize_sha(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if (7..=40).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(trimmed.to_ascii_lowercase())
    } else {
        None
    }
}

/// Nearest ancestor of `start` containing a `.git` entry.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(".git").exists() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

/// Files whose change means HEAD may point at a different commit.
///
/// `.git/HEAD` only names the branch while one is checked out, so the
/// branch ref (loose or packed) is watched as well.
pub fn head_watch_paths(repo_root: &Path) -> Vec<PathBuf> {
    let git_dir = repo_root.join(".git");
    let head = git_dir.join("HEAD");
    let mut paths = vec![head.clone(), git_dir.join("packed-refs")];

    if let Ok(content) = std::fs::read_to_string(&head) {
        if let Some(reference) = content.trim().strip_prefix("ref:") {
            paths.push(git_dir.join(reference.trim()));
        }
    }

    paths.into_iter().filter(|p| p.exists()).collect()
}
