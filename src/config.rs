use crate::domain::CounterOverflow;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project manifest searched in the current directory
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Name of the user-level configuration file inside the config directory
pub const USER_CONFIG_FILE: &str = "dev-version.toml";

/// Represents the configuration for dev-version.
///
/// Read from the `[tool.dev_version]` table of a project manifest or from a
/// flat file holding the same keys at top level.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Version module to write; nothing is written when unset
    #[serde(default)]
    pub write_to: Option<PathBuf>,

    /// Reference whose version is computed
    #[serde(default = "default_rev")]
    pub rev: String,

    /// Version used when the repository cannot be read
    #[serde(default)]
    pub fallback_version: Option<String>,

    #[serde(default)]
    pub counter_overflow: CounterOverflow,
}

fn default_rev() -> String {
    "HEAD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            write_to: None,
            rev: default_rev(),
            fallback_version: None,
            counter_overflow: CounterOverflow::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    tool: ToolTable,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(alias = "lsst_versions")]
    dev_version: Option<Config>,
}

impl Config {
    /// Parse the `[tool.dev_version]` table of a manifest; defaults if absent
    pub fn from_manifest_str(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest.tool.dev_version.unwrap_or_default())
    }

    /// Parse either a manifest with a `[tool.dev_version]` table or a flat file
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        match manifest.tool.dev_version {
            Some(config) => Ok(config),
            None => Ok(toml::from_str(content)?),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (manifest or flat file)
/// 2. `[tool.dev_version]` in `pyproject.toml` in current directory
/// 3. `dev-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        log::info!("Loading config from {}", path.display());
        return Config::from_toml_str(&fs::read_to_string(path)?);
    }

    if Path::new(MANIFEST_FILE).exists() {
        log::info!("Loading config from ./{}", MANIFEST_FILE);
        return Config::from_manifest_str(&fs::read_to_string(MANIFEST_FILE)?);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(USER_CONFIG_FILE);
        if user_config.exists() {
            log::info!("Loading config from {}", user_config.display());
            return Config::from_toml_str(&fs::read_to_string(user_config)?);
        }
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}
