//! Configuration management for lexscan.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `lexscan.toml` file
//! 3. User config `~/.config/lexscan/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Web UI server configuration.
    pub server: ServerConfig,

    /// Text-generation provider configuration.
    pub generation: GenerationConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./lexscan.toml` (project local)
    /// 2. `~/.config/lexscan/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("LEXSCAN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LEXSCAN_PORT") {
            if let Ok(n) = port.parse() {
                self.server.port = n;
            }
        }

        // Generation overrides
        if let Some(endpoint) = lookup("LEXSCAN_ENDPOINT") {
            self.generation.endpoint = endpoint;
        }
        if let Some(secs) = lookup("LEXSCAN_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.generation.timeout_secs = n;
            }
        }
        if let Some(token) = lookup("LEXSCAN_API_TOKEN").or_else(|| lookup("HF_API_TOKEN")) {
            self.generation.api_token = Some(token);
        }
    }

    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("generation.endpoint is empty".to_string()));
        }
        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "generation.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the configuration as TOML. The API token is never included.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Web UI server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Open the page in a browser after starting.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: DEFAULT_OPEN_BROWSER,
        }
    }
}

/// Text-generation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Endpoint receiving the POST request.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum tokens to generate.
    pub max_new_tokens: u32,

    /// Sampling temperature.
    pub temperature: f64,

    /// Bearer token (can also be set via environment variable).
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_token: None,
        }
    }
}

impl GenerationConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.generation.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.generation.timeout(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default().to_toml_string();
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[generation]"));
    }

    #[test]
    fn test_temperature_printed_exactly() {
        let toml_str = Config::default().to_toml_string();
        assert!(toml_str.contains("temperature = 0.7\n"), "{toml_str}");
    }

    #[test]
    fn test_api_token_not_serialized() {
        let mut config = Config::default();
        config.generation.api_token = Some("hf_secret".to_string());
        assert!(!config.to_toml_string().contains("hf_secret"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LEXSCAN_PORT", "8080"),
            ("LEXSCAN_TIMEOUT_SECS", "not-a-number"),
            ("HF_API_TOKEN", "hf_abc"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generation.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.generation.api_token.as_deref(), Some("hf_abc"));
    }

    #[test]
    fn test_lexscan_token_wins_over_hf_token() {
        let mut config = Config::default();
        config.apply_overrides_from(|key| match key {
            "LEXSCAN_API_TOKEN" => Some("primary".to_string()),
            "HF_API_TOKEN" => Some("secondary".to_string()),
            _ => None,
        });
        assert_eq!(config.generation.api_token.as_deref(), Some("primary"));
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let mut config = Config::default();
        config.generation.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
