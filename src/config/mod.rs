//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/ember-map/config.toml

pub mod defaults;

use crate::constants::fires::MAX_GENERATE_COUNT;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// CLI defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Fire generation and feed limits
    #[serde(default)]
    pub fires: FiresConfig,

    /// Upstream data sources
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Fire generation and feed limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiresConfig {
    /// Points generated when the live feed is unavailable
    #[serde(default = "default_demo_count")]
    pub demo_count: usize,

    /// Live records returned per request
    #[serde(default = "default_max_returned")]
    pub max_returned: usize,

    /// Sampling attempts allowed per requested point
    #[serde(default = "default_attempt_factor")]
    pub attempt_factor: usize,

    #[serde(default = "default_brightness_min")]
    pub brightness_min: f64,

    #[serde(default = "default_brightness_max")]
    pub brightness_max: f64,

    /// Feed payloads at or under this length are ignored
    #[serde(default = "default_min_payload_len")]
    pub min_payload_len: usize,
}

/// Upstream data sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// FIRMS base URL
    #[serde(default = "default_firms_url")]
    pub firms_url: String,

    /// FIRMS map key (empty for keyless requests)
    #[serde(default)]
    pub firms_map_key: String,

    /// Full OpenAQ "latest" URL
    #[serde(default = "default_openaq_url")]
    pub openaq_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_demo_count() -> usize {
    DEMO_COUNT
}
fn default_max_returned() -> usize {
    MAX_RETURNED
}
fn default_attempt_factor() -> usize {
    ATTEMPT_FACTOR
}
fn default_brightness_min() -> f64 {
    BRIGHTNESS_MIN
}
fn default_brightness_max() -> f64 {
    BRIGHTNESS_MAX
}
fn default_min_payload_len() -> usize {
    MIN_PAYLOAD_LEN
}
fn default_firms_url() -> String {
    FIRMS_URL.to_string()
}
fn default_openaq_url() -> String {
    OPENAQ_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    TIMEOUT_SECS
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for FiresConfig {
    fn default() -> Self {
        Self {
            demo_count: default_demo_count(),
            max_returned: default_max_returned(),
            attempt_factor: default_attempt_factor(),
            brightness_min: default_brightness_min(),
            brightness_max: default_brightness_max(),
            min_payload_len: default_min_payload_len(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            firms_url: default_firms_url(),
            firms_map_key: String::new(),
            openaq_url: default_openaq_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it with defaults
    /// when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            let config: Config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the generator can't work with
    pub fn validate(&self) -> Result<()> {
        let f = &self.fires;
        if f.demo_count > MAX_GENERATE_COUNT {
            return Err(Error::Config(format!(
                "fires.demo_count must be at most {}, got {}",
                MAX_GENERATE_COUNT, f.demo_count
            )));
        }
        // Brightness is drawn from [min, max), so the range must be non-empty
        if !(f.brightness_min.is_finite() && f.brightness_max.is_finite())
            || f.brightness_min >= f.brightness_max
        {
            return Err(Error::Config(format!(
                "Invalid brightness range: {}..{}",
                f.brightness_min, f.brightness_max
            )));
        }
        if f.attempt_factor == 0 {
            return Err(Error::Config("fires.attempt_factor must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["fires", "demo_count"] => Some(self.fires.demo_count.to_string()),
            ["fires", "max_returned"] => Some(self.fires.max_returned.to_string()),
            ["fires", "attempt_factor"] => Some(self.fires.attempt_factor.to_string()),
            ["fires", "brightness_min"] => Some(self.fires.brightness_min.to_string()),
            ["fires", "brightness_max"] => Some(self.fires.brightness_max.to_string()),
            ["fires", "min_payload_len"] => Some(self.fires.min_payload_len.to_string()),

            ["upstream", "firms_url"] => Some(self.upstream.firms_url.clone()),
            ["upstream", "firms_map_key"] => Some(self.upstream.firms_map_key.clone()),
            ["upstream", "openaq_url"] => Some(self.upstream.openaq_url.clone()),
            ["upstream", "timeout_secs"] => Some(self.upstream.timeout_secs.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong. The config is
    /// left unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "format"] => next.defaults.format = value.to_string(),

            ["fires", "demo_count"] => next.fires.demo_count = parse_value(key, value)?,
            ["fires", "max_returned"] => next.fires.max_returned = parse_value(key, value)?,
            ["fires", "attempt_factor"] => next.fires.attempt_factor = parse_value(key, value)?,
            ["fires", "brightness_min"] => next.fires.brightness_min = parse_value(key, value)?,
            ["fires", "brightness_max"] => next.fires.brightness_max = parse_value(key, value)?,
            ["fires", "min_payload_len"] => {
                next.fires.min_payload_len = parse_value(key, value)?
            }

            ["upstream", "firms_url"] => next.upstream.firms_url = value.to_string(),
            ["upstream", "firms_map_key"] => next.upstream.firms_map_key = value.to_string(),
            ["upstream", "openaq_url"] => next.upstream.openaq_url = value.to_string(),
            ["upstream", "timeout_secs"] => next.upstream.timeout_secs = parse_value(key, value)?,

            ["server", "host"] => next.server.host = value.to_string(),
            ["server", "port"] => next.server.port = parse_value(key, value)?,

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        next.validate()?;
        *self = next;
        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.format",
            "fires.demo_count",
            "fires.max_returned",
            "fires.attempt_factor",
            "fires.brightness_min",
            "fires.brightness_max",
            "fires.min_payload_len",
            "upstream.firms_url",
            "upstream.firms_map_key",
            "upstream.openaq_url",
            "upstream.timeout_secs",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
