use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Skip edges leading back into the current path instead of recursing
    /// forever on cyclic ancestry.
    pub guard_cycles: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { guard_cycles: true }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("apisince.toml")
}

/// Load the resolver config from `path`, or from [`default_config_path`].
/// Returns `None` when the file does not exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ResolverConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ResolverConfig = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), ?config, "loaded resolver config");
    Ok(Some(config))
}
