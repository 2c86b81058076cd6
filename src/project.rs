// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build and release metadata for docs-indexer.
//!
//! All values are fixed at compile time. Consumers receive a
//! [`ProjectMetadata`] value instead of reaching for globals, which keeps
//! test doubles trivial to construct.

use serde::Serialize;

/// Placeholder reported when the build carries no git revision.
pub const UNKNOWN_GIT_SHA: &str = "n/a";

/// Raw value from the build script. vergen reports placeholder text when
/// it cannot read the repository, so it is checked before use.
const RAW_GIT_SHA: &str = env!("VERGEN_GIT_SHA");

/// Git revision the binary was built from, or [`UNKNOWN_GIT_SHA`].
pub const GIT_SHA: &str = sanitize_git_sha(RAW_GIT_SHA);

/// `--version` output, `<version> (<git sha>)`. Same text as
/// [`ProjectMetadata::long_version`] for the running build.
pub const LONG_VERSION: &str = if is_commit_hash(RAW_GIT_SHA) {
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")")
} else {
    concat!(env!("CARGO_PKG_VERSION"), " (n/a)")
};

/// Descriptive information about this build of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    description: &'static str,
    git_sha: &'static str,
    name: &'static str,
    source: &'static str,
    version: &'static str,
}

impl ProjectMetadata {
    pub const fn new(
        name: &'static str,
        version: &'static str,
        git_sha: &'static str,
        description: &'static str,
        source: &'static str,
    ) -> Self {
        Self {
            description,
            git_sha,
            name,
            source,
            version,
        }
    }

    /// Metadata of the running binary.
    pub const fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            GIT_SHA,
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_REPOSITORY"),
        )
    }

    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Commit the build was made from, or `n/a`.
    pub const fn git_sha(&self) -> &'static str {
        self.git_sha
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical source repository URL.
    pub const fn source(&self) -> &'static str {
        self.source
    }

    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// `<version> (<git sha>)`; the SHA part reads `n/a` when unknown.
    pub fn long_version(&self) -> String {
        format!("{} ({})", self.version, self.git_sha)
    }
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self::current()
    }
}

/// `raw` if it is commit-hash shaped, otherwise [`UNKNOWN_GIT_SHA`].
pub const fn sanitize_git_sha(raw: &str) -> &str {
    if is_commit_hash(raw) {
        raw
    } else {
        UNKNOWN_GIT_SHA
    }
}

/// Between 7 (abbreviated) and 40 (full SHA-1) hex digits.
pub const fn is_commit_hash(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 7 || bytes.len() > 40 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}
