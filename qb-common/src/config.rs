//! Configuration loading and config file resolution

use crate::points::{is_allowed, ALLOWED_POINTS, DEFAULT_POINTS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "QB_CONFIG";

/// Compiled-in defaults used when no config file supplies a value
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub bind: String,
    pub log_level: String,
    pub default_points: u32,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5780".to_string(),
            log_level: "info".to_string(),
            default_points: DEFAULT_POINTS,
        }
    }
}

/// `[server]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> String {
    CompiledDefaults::default().bind
}

/// `[logging]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    CompiledDefaults::default().log_level
}

/// `[quests]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestConfig {
    /// Points applied when extraction yields no usable value
    #[serde(default = "default_points")]
    pub default_points: u32,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            default_points: default_points(),
        }
    }
}

fn default_points() -> u32 {
    CompiledDefaults::default().default_points
}

/// Contents of `qb-ingest.toml`
///
/// Every table and key is optional; missing ones fall back to
/// [`CompiledDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub quests: QuestConfig,
}

impl TomlConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if !is_allowed(self.quests.default_points) {
            return Err(Error::Config(format!(
                "quests.default_points = {} is not one of the allowed point values {:?}",
                self.quests.default_points, ALLOWED_POINTS
            )));
        }
        if self.server.bind.trim().is_empty() {
            return Err(Error::Config("server.bind cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Config file resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. Per-user config file (`<config dir>/questboard/<module>.toml`)
///
/// Returns `None` when no source names a file; callers then use compiled
/// defaults.
pub fn resolve_config_path(cli_arg: Option<&Path>, module_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: user config directory, only if the file exists
    dirs::config_dir()
        .map(|d| d.join("questboard").join(format!("{}.toml", module_name)))
        .filter(|p| p.exists())
}

/// Load configuration from `path`
///
/// A missing file is not fatal: a warning is logged and defaults are used.
/// An unreadable or invalid file is an error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file {} not found, using compiled defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = TomlConfig::from_toml_str(&content)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Resolve and load the configuration for `module_name`
pub fn load_module_config(cli_arg: Option<&Path>, module_name: &str) -> Result<TomlConfig> {
    match resolve_config_path(cli_arg, module_name) {
        Some(path) => load_toml_config(&path),
        None => {
            info!("No config file for {}, using compiled defaults", module_name);
            Ok(TomlConfig::default())
        }
    }
}
