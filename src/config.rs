use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::fortune::scoring::ScoreWeights;
use crate::Result;

/// Main configuration for the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Metrics collaborator configuration
    pub metrics: MetricsConfig,

    /// Narrative collaborator (Gemini) configuration
    pub gemini: GeminiConfig,

    /// Weights for the composite score
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Base URL of the token metrics API
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (taken from GEMINI_API_KEY if unset here)
    pub api_key: Option<String>,
    /// Model identifier, e.g. "gemini-1.5-flash"
    pub model: String,
    /// Base URL of the generative language API
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let port = std::env::var("AIFORTUNE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self {
            server: ServerConfig {
                host: std::env::var("AIFORTUNE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port,
            },
            metrics: MetricsConfig {
                base_url: "https://api.dexscreener.com".to_string(),
            },
            gemini: GeminiConfig {
                api_key: std::env::var("GEMINI_API_KEY").ok(),
                model: "gemini-1.5-flash".to_string(),
                base_url: "https://generativelanguage.googleapis.com".to_string(),
            },
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.server.port > 0);
        assert!(config.metrics.base_url.starts_with("https://"));
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_server_addr() {
        let mut config = Config::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 9000;
        assert_eq!(config.server_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_from_file_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server_addr(), config.server_addr());
        assert_eq!(parsed.gemini.model, config.gemini.model);
    }
}
