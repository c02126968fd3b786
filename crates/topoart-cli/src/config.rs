//! Configuration management for the TopoART CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use topoart::prelude::TopoArtConfig;

pub const CONFIG_FILE: &str = "topoart.toml";

/// TopoART project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: TopoArtConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Complement code every row before learning.
    #[serde(default)]
    pub complement_code: bool,
}

impl Config {
    /// Load topoart.toml from the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.network.validate()?;
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find topoart.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.network, TopoArtConfig::default());
        assert!(!config.input.complement_code);
    }

    #[test]
    fn partial_network_table_keeps_other_defaults() {
        let config = Config::parse(
            "[network]\nvigilance = 0.9\nphi = 10\n\n[input]\ncomplement_code = true\n",
        )
        .unwrap();
        assert_eq!(config.network.vigilance, 0.9);
        assert_eq!(config.network.phi, 10);
        assert_eq!(config.network.tau, TopoArtConfig::default().tau);
        assert!(config.input.complement_code);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Config::parse("[network]\nbeta = 2.0\n").is_err());
        assert!(Config::parse("[network]\ntau = -1\n").is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.network, TopoArtConfig::default());
    }

    #[test]
    fn saved_config_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.network = config.network.with_vigilance(0.9);
        config.input.complement_code = true;
        config.save(&path).unwrap();

        let parsed = Config::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.network.vigilance, 0.9);
        assert!(parsed.input.complement_code);
    }
}
