//! Server configuration for persona.
//!
//! Values come from an optional JSON file (path in `PERSONA_CONFIG`) and are
//! then overridden by individual environment variables.

use std::env;
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Environment keys
// ─────────────────────────────────────────────────────────────────────────────

pub const CONFIG_PATH_VAR: &str = "PERSONA_CONFIG";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
pub const TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

// ─────────────────────────────────────────────────────────────────────────────
// Config Structs
// ─────────────────────────────────────────────────────────────────────────────

/// Generative model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub model: String,
    pub api_base: String,
    /// Missing key leaves the server up; model calls then fail.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            api_key: None,
            request_timeout_secs: 120,
        }
    }
}

impl ModelSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model: ModelSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3001,
            model: ModelSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Loads the file named by `PERSONA_CONFIG` (if any), then applies env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::load`], reading variables through `lookup`.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match non_empty(&lookup, CONFIG_PATH_VAR) {
            Some(path) => {
                info!("Loading config from {}", path);
                Self::from_file(Path::new(&path))?
            }
            None => Self::default(),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Overrides fields from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = non_empty(&lookup, HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = non_empty(&lookup, PORT_VAR) {
            self.port = parse(PORT_VAR, &port)?;
        }
        if let Some(model) = non_empty(&lookup, MODEL_VAR) {
            self.model.model = model;
        }
        if let Some(base) = non_empty(&lookup, API_BASE_VAR) {
            self.model.api_base = base;
        }
        if let Some(key) = non_empty(&lookup, API_KEY_VAR) {
            self.model.api_key = Some(key);
        }
        if let Some(secs) = non_empty(&lookup, TIMEOUT_VAR) {
            self.model.request_timeout_secs = parse(TIMEOUT_VAR, &secs)?;
        }
        self.check()
    }

    /// Resolves `host:port`; host names are looked up, not just IP literals.
    pub fn listen_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        let addrs: Vec<SocketAddr> = (self.host.as_str(), self.port).to_socket_addrs()?.collect();
        if addrs.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: HOST_VAR,
                value: self.host.clone(),
            });
        }
        Ok(addrs)
    }

    // A zero timeout would fail every model call before it is sent.
    fn check(&self) -> Result<(), ConfigError> {
        if self.model.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: TIMEOUT_VAR,
                value: "0".into(),
            });
        }
        Ok(())
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
