use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Include/exclude glob filter over repository-relative paths.
///
/// An empty include list accepts every path; an exclude match always wins.
#[derive(Clone, Debug)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl PathFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_set(include).context("build include globs")?)
        };
        let exclude = build_set(exclude).context("build exclude globs")?;
        Ok(Self { include, exclude })
    }

    pub fn accept_all() -> Self {
        Self {
            include: None,
            exclude: GlobSet::empty(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.exclude.is_match(path) {
            return false;
        }
        match &self.include {
            Some(set) => set.is_match(path),
            None => true,
        }
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for p in patterns {
        let glob = Glob::new(p).with_context(|| format!("invalid glob: {}", p))?;
        builder.add(glob);
    }
    builder.build().context("compile globs")
}

#[cfg(test)]
#[path = "../tests/git/filter_tests.rs"]
mod tests;
