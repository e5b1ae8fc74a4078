use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::RevdistConfig;

pub const CONFIG_FILE: &str = "revdist.json";

const SUPPORTED_VERSION: u32 = 1;

pub fn config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(CONFIG_FILE)
}

/// Reads `revdist.json` from the repository root, or the defaults when the
/// file is absent.
pub fn load_repo_config(repo_root: &Path) -> Result<RevdistConfig> {
    let path = config_path(repo_root);
    if !path.exists() {
        return Ok(RevdistConfig::default());
    }
    read_config(&path)
}

/// Reads an explicitly named config file, which must exist.
pub fn read_config(path: &Path) -> Result<RevdistConfig> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&bytes).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_config(bytes: &[u8]) -> Result<RevdistConfig> {
    let cfg: RevdistConfig = serde_json::from_slice(bytes).context("parse config json")?;
    if cfg.version != SUPPORTED_VERSION {
        return Err(anyhow!(
            "unsupported config version {} (expected {})",
            cfg.version,
            SUPPORTED_VERSION
        ));
    }
    Ok(cfg)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
