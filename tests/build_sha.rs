// SPDX-License-Identifier: MIT OR Apache-2.0

#[path = "../build_support/git_sha.rs"]
mod git_sha;

use std::fs;
use tempfile::TempDir;

use git_sha::{find_repo_root, head_watch_paths, normalize_sha, FALLBACK_SHA, OVERRIDE_VAR};

#[test]
fn override_accepts_short_and_full_hex() {
    assert_eq!(normalize_sha("abcdef0").as_deref(), Some("abcdef0"));
    assert_eq!(normalize_sha(" ABCDEF0\n").as_deref(), Some("abcdef0"));
    let full = "0123456789abcdef0123456789abcdef01234567";
    assert_eq!(normalize_sha(full).as_deref(), Some(full));
}

#[test]
fn override_rejects_non_hex_values() {
    for bad in ["", "n/a", "main", "xyz1234", "abc123", &"a".repeat(41)] {
        assert!(normalize_sha(bad).is_none(), "accepted {bad:?}");
    }
    assert_eq!(OVERRIDE_VAR, "DOCS_INDEXER_GIT_SHA");
}

#[test]
fn directory_without_repository_has_no_root() {
    let dir = TempDir::new().expect("tempdir");
    let nested = dir.path().join("a/b");
    fs::create_dir_all(&nested).expect("mkdir");
    // A tempdir may live under a checkout; only assert when it does not.
    if let Some(root) = find_repo_root(&nested) {
        assert!(!root.starts_with(dir.path()));
    }
    assert_eq!(FALLBACK_SHA, "n/a");
}

#[test]
fn repository_root_is_nearest_ancestor() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir_all(dir.path().join(".git")).expect("mkdir .git");
    let nested = dir.path().join("crates/docs");
    fs::create_dir_all(&nested).expect("mkdir nested");
    assert_eq!(find_repo_root(&nested).as_deref(), Some(dir.path()));
}

#[test]
fn branch_ref_is_watched_alongside_head() {
    let dir = TempDir::new().expect("tempdir");
    let git_dir = dir.path().join(".git");
    fs::create_dir_all(git_dir.join("refs/heads")).expect("mkdir refs");
    fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").expect("write HEAD");
    fs::write(git_dir.join("refs/heads/main"), "0123456789abcdef0123456789abcdef01234567\n")
        .expect("write ref");

    let paths = head_watch_paths(dir.path());
    assert!(paths.contains(&git_dir.join("HEAD")));
    assert!(paths.contains(&git_dir.join("refs/heads/main")));
    // packed-refs does not exist here
    assert_eq!(paths.len(), 2);
}

#[test]
fn detached_head_watches_head_only() {
    let dir = TempDir::new().expect("tempdir");
    let git_dir = dir.path().join(".git");
    fs::create_dir_all(&git_dir).expect("mkdir .git");
    fs::write(git_dir.join("HEAD"), "0123456789abcdef0123456789abcdef01234567\n")
        .expect("write HEAD");
    fs::write(git_dir.join("packed-refs"), "").expect("write packed-refs");

    let paths = head_watch_paths(dir.path());
    assert_eq!(paths, vec![git_dir.join("HEAD"), git_dir.join("packed-refs")]);
}
