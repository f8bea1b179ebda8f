//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `TIMEPAL_DATA_DIR` is unset, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file anywhere, runs on defaults
//!
//! ## Environment Variables
//! - `TIMEPAL_DATA_DIR`: Directory holding the collection files (required)
//! - `TIMEPAL_LOG_LEVEL`: Default tracing filter directive
//! - `TIMEPAL_LOG_JSON`: Emit JSON log lines (true/false)
//! - `TIMEPAL_TIMEZONE`: IANA zone used to bucket days
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./timepal.json` or `./timepal.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use timepal_domain::{Config, LocaleConfig, LoggingConfig, Result, StorageConfig, TimePalError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the data directory
/// variable is missing, falls back to a config file, and to
/// [`Config::default`] when no config file exists.
///
/// # Errors
/// Returns `TimePalError::Config` if a config file exists but cannot be
/// read or parsed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            if probe_config_paths().is_none() {
                tracing::warn!("No config file found, using defaults");
                return Ok(Config::default());
            }
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `TIMEPAL_DATA_DIR` must be present; the other variables fall back to
/// their defaults.
///
/// # Errors
/// Returns `TimePalError::Config` if the data directory variable is missing
/// or blank.
pub fn load_from_env() -> Result<Config> {
    let data_dir = env_var("TIMEPAL_DATA_DIR")?;
    if data_dir.trim().is_empty() {
        return Err(TimePalError::Config("TIMEPAL_DATA_DIR must not be empty".to_string()));
    }

    let defaults = LoggingConfig::default();
    let level = std::env::var("TIMEPAL_LOG_LEVEL").unwrap_or(defaults.level);
    let json = env_bool("TIMEPAL_LOG_JSON", defaults.json);
    let timezone = std::env::var("TIMEPAL_TIMEZONE").ok().filter(|tz| !tz.trim().is_empty());

    Ok(Config {
        storage: StorageConfig { data_dir },
        logging: LoggingConfig { level, json },
        locale: LocaleConfig { timezone },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TimePalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TimePalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TimePalError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TimePalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TimePalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TimePalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TimePalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parents (up to 2 levels)
/// and the executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 8] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("timepal.json"),
        dir.join("timepal.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Resolve the configured IANA zone
///
/// `None` means "use the host's local zone".
///
/// # Errors
/// Returns `TimePalError::Config` for a name `chrono-tz` does not know.
pub fn resolve_timezone(locale: &LocaleConfig) -> Result<Option<Tz>> {
    locale
        .timezone
        .as_deref()
        .map(|name| {
            name.trim()
                .parse::<Tz>()
                .map_err(|e| TimePalError::Config(format!("Unknown time zone {name:?}: {e}")))
        })
        .transpose()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        TimePalError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Returns `default` if the variable is not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
