//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which backend serves the entity collections.
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Backend selection
///
/// Chosen once at startup; the repository set is built from this and the
/// rest of the application only sees the port traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Remote record store over HTTP.
    Remote,
    /// In-memory store, primarily for local development and tests.
    #[default]
    Memory,
}

/// Record store connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub project_id: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            project_id: String::new(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { backend: BackendKind::Memory, store: StoreConfig::default() }
    }
}
