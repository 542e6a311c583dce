// src/config.rs
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::errors::{Result, SentimentError};
use crate::presenter::ResultOrder;

/// Where the sentiment model API lives.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentApiConfig {
    pub api_base: String,
}

impl SentimentApiConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Full URL of the sentiment endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/sentiment", self.api_base.trim_end_matches('/'))
    }

    fn check(&self) -> Result<()> {
        let url = Url::parse(&self.api_base).map_err(|e| {
            SentimentError::Config(format!("Invalid sentiment API URL '{}': {}", self.api_base, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SentimentError::Config(format!(
                "Sentiment API URL must use http or https, got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub order: ResultOrder,
    pub stage_delay_ms: u64,
}

impl PresentationConfig {
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            order: ResultOrder::default(),
            stage_delay_ms: 100,
        }
    }
}

/// High-level application configuration, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub sentiment_api: SentimentApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| SentimentError::Config(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn new(sentiment_api: SentimentApiConfig) -> Self {
        Self {
            sentiment_api,
            server: ServerConfig::default(),
            presentation: PresentationConfig::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_base = std::env::var("SENTIMENT_API_URL").map_err(|_| {
            SentimentError::Config(
                "No sentiment API configured. Please set SENTIMENT_API_URL.".to_string(),
            )
        })?;

        let defaults = ServerConfig::default();
        let server = ServerConfig {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
        };

        let defaults = PresentationConfig::default();
        let presentation = PresentationConfig {
            order: parse_var("RESULT_ORDER", defaults.order)?,
            stage_delay_ms: parse_var("STAGE_DELAY_MS", defaults.stage_delay_ms)?,
        };

        let config = AppConfig {
            sentiment_api: SentimentApiConfig::new(api_base.trim()),
            server,
            presentation,
        };
        config.sentiment_api.check()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.sentiment_api.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(
            SentimentApiConfig::new("http://model.local:8000/").endpoint(),
            "http://model.local:8000/sentiment"
        );
        assert_eq!(
            SentimentApiConfig::new("https://api.example.com/v2").endpoint(),
            "https://api.example.com/v2/sentiment"
        );
    }

    #[test]
    fn test_full_toml_config() {
        let config = AppConfig::from_toml_str(
            r#"
            [sentiment_api]
            api_base = "http://localhost:8000"

            [server]
            host = "127.0.0.1"
            port = 3000

            [presentation]
            order = "fixed"
            stage_delay_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.sentiment_api.api_base, "http://localhost:8000");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.presentation.order, ResultOrder::Fixed);
        assert_eq!(config.presentation.stage_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [sentiment_api]
            api_base = "http://localhost:8000"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.presentation.order, ResultOrder::Descending);
        assert_eq!(config.presentation.stage_delay_ms, 100);
    }

    #[test]
    fn test_rejects_missing_or_invalid_api_base() {
        assert!(matches!(
            AppConfig::from_toml_str("[server]\nport = 3000\n"),
            Err(SentimentError::TomlParse(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[sentiment_api]\napi_base = \"not a url\"\n"),
            Err(SentimentError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[sentiment_api]\napi_base = \"ftp://host\"\n"),
            Err(SentimentError::Config(_))
        ));
    }
}
