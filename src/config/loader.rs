//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/jlv/config.toml`:
///
/// ```toml
/// level = "warn"
/// sort = "-timestamp"
/// spacing = 2
///
/// [level_colors]
/// info = "white"
/// fatal = "magenta"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Only show entries with this level.
    #[serde(default)]
    pub level: Option<String>,

    /// Field to sort entries by; a leading `-` sorts descending.
    #[serde(default)]
    pub sort: Option<String>,

    /// Blank columns between table cells.
    #[serde(default)]
    pub spacing: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Level name → colour name, merged over the defaults.
    #[serde(default)]
    pub level_colors: Option<BTreeMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Level filter.
    pub level: Option<String>,
    /// Sort field.
    pub sort: Option<String>,
    /// Cell spacing.
    pub spacing: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Level name → colour name.
    pub level_colors: BTreeMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            level: None,
            sort: None,
            spacing: 1,
            log_file_path: default_log_path(),
            level_colors: default_level_colors(),
        }
    }
}

/// Colours used for the level column when the config file says nothing.
pub fn default_level_colors() -> BTreeMap<String, String> {
    [
        ("debug", "blue"),
        ("verb", "cyan"),
        ("info", "green"),
        ("notice", "green"),
        ("warn", "yellow"),
        ("error", "red"),
    ]
    .into_iter()
    .map(|(level, color)| (level.to_string(), color.to_string()))
    .collect()
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/jlv/jlv.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("jlv").join("jlv.log")
    } else {
        PathBuf::from("jlv.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/jlv/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jlv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `JLV_CONFIG` environment variable
/// 3. Default path `~/.config/jlv/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var("JLV_CONFIG") {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// Scalar fields replace the default; `level_colors` entries are layered on
/// top of the default palette.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let mut level_colors = defaults.level_colors;
    level_colors.extend(config.level_colors.unwrap_or_default());

    ResolvedConfig {
        level: config.level.or(defaults.level),
        sort: config.sort.or(defaults.sort),
        spacing: config.spacing.unwrap_or(defaults.spacing),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        level_colors,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `JLV_LEVEL`: Override level filter
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(level) = std::env::var("JLV_LEVEL") {
        config.level = Some(level);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest).
/// Only flags the user actually passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    level_override: Option<String>,
    sort_override: Option<String>,
    log_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(level) = level_override {
        config.level = Some(level);
    }

    if let Some(sort) = sort_override {
        config.sort = Some(sort);
    }

    if let Some(path) = log_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
