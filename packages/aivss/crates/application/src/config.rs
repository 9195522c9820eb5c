use anyhow::{Context, Result};
use domain::ThreatMultiplier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".aivss";
const CONFIG_FILE: &str = "config.toml";

/// User configuration, read from `~/.aivss/config.toml` unless a path is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Threat multiplier a fresh session starts with
    pub default_threat: ThreatMultiplier,

    /// Scenario catalog to use instead of the builtin presets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_catalog: Option<PathBuf>,

    /// `tracing` filter level for the CLI
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_threat: ThreatMultiplier::default(),
            scenario_catalog: None,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// `~/.aivss/config.toml`, if a home directory can be found
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    tracing::debug!("No configuration file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        // Relative catalog paths are relative to the config file
        if let (Some(catalog), Some(dir)) = (&config.scenario_catalog, path.parent()) {
            if catalog.is_relative() {
                config.scenario_catalog = Some(dir.join(catalog));
            }
        }

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}
