//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use expense_hex::{WebhookConfig, outbound::DEFAULT_WEBHOOK_URL};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub webhook: WebhookConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT is not a valid port: {}", e))?;

        let url = lookup("EXTRACTION_WEBHOOK_URL")
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        let timeout_secs: u64 = lookup("WEBHOOK_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("WEBHOOK_TIMEOUT_SECS must be whole seconds: {}", e))?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("Unknown LOG_FORMAT: {}. Supported: text, json", other),
        };

        Ok(Self {
            port,
            webhook: WebhookConfig {
                url,
                timeout: Duration::from_secs(timeout_secs),
            },
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.webhook.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.webhook.timeout, Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "9100"),
            ("EXTRACTION_WEBHOOK_URL", "http://localhost:5678/webhook/x"),
            ("WEBHOOK_TIMEOUT_SECS", "5"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.webhook.url, "http://localhost:5678/webhook/x");
        assert_eq!(config.webhook.timeout, Duration::from_secs(5));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("PORT", "http")]).is_err());
        assert!(load(&[("WEBHOOK_TIMEOUT_SECS", "1.5")]).is_err());
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
