//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `HRDESK_BACKEND` is set, the configuration is built entirely from
//!    environment variables
//! 2. Otherwise, probes multiple paths for a config file
//! 3. If no file is found either, the memory-backend default applies
//!
//! ## Environment Variables
//! - `HRDESK_BACKEND`: `remote` or `memory`
//! - `HRDESK_STORE_BASE_URL`: Record store base URL (required for `remote`)
//! - `HRDESK_STORE_PROJECT_ID`: Record store project id (required for `remote`)
//! - `HRDESK_STORE_API_KEY`: Record store API key (required for `remote`)
//! - `HRDESK_STORE_TIMEOUT_SECS`: Request timeout in seconds (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./hrdesk.json` or `./hrdesk.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use hrdesk_domain::config::{BackendKind, StoreConfig};
use hrdesk_domain::{Config, HrdeskError, Result};

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when `HRDESK_BACKEND` is present; otherwise
/// config files are probed, and the memory-backend default is the final
/// fallback.
///
/// # Errors
/// Returns `HrdeskError::Config` if the chosen source is present but
/// incomplete or malformed.
pub fn load() -> Result<Config> {
    if std::env::var("HRDESK_BACKEND").is_ok() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, defaulting to the memory backend");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// The remote backend requires the store connection variables; the memory
/// backend needs nothing beyond `HRDESK_BACKEND` itself.
///
/// # Errors
/// Returns `HrdeskError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<Config> {
    let backend = match env_var("HRDESK_BACKEND")?.to_ascii_lowercase().as_str() {
        "remote" => BackendKind::Remote,
        "memory" => BackendKind::Memory,
        other => {
            return Err(HrdeskError::Config(format!("Unknown backend kind: {}", other)));
        }
    };

    let store = match backend {
        BackendKind::Memory => StoreConfig::default(),
        BackendKind::Remote => {
            let timeout_secs = match std::env::var("HRDESK_STORE_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .map_err(|e| HrdeskError::Config(format!("Invalid timeout: {}", e)))?,
                Err(_) => StoreConfig::default().timeout_secs,
            };
            StoreConfig {
                base_url: env_var("HRDESK_STORE_BASE_URL")?,
                project_id: env_var("HRDESK_STORE_PROJECT_ID")?,
                api_key: env_var("HRDESK_STORE_API_KEY")?,
                timeout_secs,
            }
        }
    };

    Ok(Config { backend, store })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `HrdeskError::Config` if the file is missing, no candidate is
/// found, or the contents do not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HrdeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            HrdeskError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HrdeskError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, format detected by extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| HrdeskError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| HrdeskError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(HrdeskError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("hrdesk.json"),
            cwd.join("hrdesk.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("hrdesk.json"),
                exe_dir.join("hrdesk.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| HrdeskError::Config(format!("Missing required environment variable: {}", key)))
}
