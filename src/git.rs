//! Builds content pairs from a git repository.
//!
//! Every command runs as `git -C <toplevel> ...`. A path that does not exist
//! at a revision (or in the working tree) reads as an empty string.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow};

use crate::model::ContentPair;

mod filter;

pub use self::filter::PathFilter;

/// The two sides of a comparison. `to: None` means the working tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevRange {
    pub from: String,
    pub to: Option<String>,
}

impl RevRange {
    pub fn new(from: impl Into<String>, to: Option<String>) -> Self {
        Self {
            from: from.into(),
            to,
        }
    }

    pub fn describe(&self) -> String {
        match &self.to {
            Some(to) => format!("{}..{}", self.from, to),
            None => format!("{}..(working tree)", self.from),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Finds the toplevel of the repository containing `path`.
    pub fn discover(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .context("run git rev-parse (is git installed?)")?;
        if !output.status.success() {
            return Err(anyhow!(
                "not a git repository: {} ({})",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        let toplevel = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if toplevel.is_empty() {
            return Err(anyhow!("git rev-parse returned empty toplevel"));
        }
        tracing::debug!(root = %toplevel, "discovered repository");
        Ok(Self {
            root: PathBuf::from(toplevel),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fails unless `rev` names a commit.
    pub fn resolve_rev(&self, rev: &str) -> Result<String> {
        let revspec = format!("{}^{{commit}}", rev);
        let output = self.git(&["rev-parse", "--verify", "--quiet", &revspec])?;
        if !output.status.success() {
            return Err(anyhow!("unknown revision: {}", rev));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Paths changed between `range.from` and `range.to` (or the working
    /// tree), in git's order. Renames are reported as a deletion plus an
    /// addition.
    pub fn changed_paths(&self, range: &RevRange) -> Result<Vec<String>> {
        let mut args = vec!["diff", "--name-only", "-z", "--no-renames", range.from.as_str()];
        if let Some(to) = &range.to {
            args.push(to.as_str());
        }
        args.push("--");
        let output = self.git(&args)?;
        if !output.status.success() {
            return Err(anyhow!(
                "git diff {} failed: {}",
                range.describe(),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        let mut out = Vec::new();
        for entry in output.stdout.split(|b| *b == 0) {
            if entry.is_empty() {
                continue;
            }
            out.push(String::from_utf8_lossy(entry).into_owned());
        }
        Ok(out)
    }

    /// Content of `path` at `rev`; empty when the path does not exist there.
    pub fn content_at(&self, rev: &str, path: &str) -> Result<String> {
        let object = format!("{}:{}", rev, path);
        let output = self.git(&["show", &object])?;
        if !output.status.success() {
            tracing::debug!(
                rev,
                path,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "path not present at revision"
            );
            return Ok(String::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Content of `path` in the working tree; empty when the file is missing.
    pub fn worktree_content(&self, path: &str) -> Result<String> {
        read_or_empty(&self.root.join(path))
    }

    /// One pair per changed path accepted by `filter`, in git's order.
    pub fn content_pairs(&self, range: &RevRange, filter: &PathFilter) -> Result<Vec<ContentPair>> {
        self.resolve_rev(&range.from)?;
        if let Some(to) = &range.to {
            self.resolve_rev(to)?;
        }

        let paths = self.changed_paths(range)?;
        tracing::info!(range = %range.describe(), changed = paths.len(), "collected changed paths");

        let mut pairs = Vec::new();
        for path in paths {
            if !filter.matches(&path) {
                tracing::debug!(path = %path, "filtered out");
                continue;
            }
            let content_a = self.content_at(&range.from, &path)?;
            let content_b = match &range.to {
                Some(to) => self.content_at(to, &path)?,
                None => self.worktree_content(&path)?,
            };
            pairs.push(ContentPair {
                identifier: path,
                content_a,
                content_b,
            });
        }
        Ok(pairs)
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!(args = ?args, "git");
        Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .with_context(|| format!("run git {}", args.first().copied().unwrap_or("")))
    }
}

/// Reads a file from disk. A path that is missing or is not a regular file
/// (a directory left where a tracked file used to be) reads as empty.
pub fn read_or_empty(path: &Path) -> Result<String> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound || path.is_dir() => {
            tracing::debug!(path = %path.display(), "not a file on disk, reads as empty");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
    }
}

#[cfg(test)]
#[path = "tests/git_tests.rs"]
mod tests;
