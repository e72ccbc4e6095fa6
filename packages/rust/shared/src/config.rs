//! Application configuration for LearnScout.
//!
//! User config lives at `~/.learnscout/learnscout.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LearnScoutError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "learnscout.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".learnscout";

// ---------------------------------------------------------------------------
// Config structs (matching learnscout.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Resource discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// `[discovery]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Timeout in seconds for scraping fetches (GitHub, Stack Overflow).
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Timeout in seconds for documentation HEAD probes.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// Maximum number of resources returned per search.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Maximum parsed entries per scraped search query.
    #[serde(default = "default_results_per_source")]
    pub results_per_source: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
            probe_timeout_secs: default_probe_timeout(),
            max_results: default_max_results(),
            results_per_source: default_results_per_source(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    8
}
fn default_probe_timeout() -> u64 {
    5
}
fn default_max_results() -> usize {
    crate::types::MAX_RESULTS
}
fn default_results_per_source() -> usize {
    3
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.learnscout/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LearnScoutError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.learnscout/learnscout.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LearnScoutError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        LearnScoutError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| LearnScoutError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| LearnScoutError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| LearnScoutError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("fetch_timeout_secs"));
        assert!(toml_str.contains("max_results"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.discovery.fetch_timeout_secs, 8);
        assert_eq!(parsed.discovery.max_results, 15);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[discovery]
max_results = 10
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.discovery.max_results, 10);
        assert_eq!(config.discovery.fetch_timeout_secs, 8);
        assert_eq!(config.discovery.probe_timeout_secs, 5);
        assert_eq!(config.discovery.results_per_source, 3);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse empty");
        assert_eq!(config.discovery.max_results, 15);
    }
}
