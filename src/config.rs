//! Process configuration, loaded once at startup.
//!
//! Everything the client needs is resolved into an explicit [`Config`] up
//! front; nothing is read from the environment after construction, and a
//! missing credential fails here rather than mid-request.

use crate::error::{ConverseError, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default decoding temperature (greedy/deterministic).
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Resolved configuration for the chat-completion client.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
}

impl Config {
    /// Create a config from explicit values, with default base URL and
    /// temperature.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the decoding temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Load from environment variables (`OPENAI_API_KEY`, `OPENAI_MODEL`,
    /// optional `OPENAI_BASE_URL` and `OPENAI_TEMPERATURE`).
    ///
    /// Reads `.env` if present. Fails before any network I/O when the key
    /// or model is absent.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_vars(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_MODEL").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
            std::env::var("OPENAI_TEMPERATURE").ok(),
        )
    }

    fn from_vars(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
        temperature: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConverseError::Configuration("Missing OPENAI_API_KEY".into()))?;
        let model = model
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ConverseError::Configuration("Missing OPENAI_MODEL".into()))?;

        let mut config = Self::new(api_key, model);
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        if let Some(raw) = temperature {
            let temp = raw.parse::<f64>().map_err(|_| {
                ConverseError::Configuration(format!("Invalid OPENAI_TEMPERATURE: {raw:?}"))
            })?;
            config = config.with_temperature(temp);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(
        key: Option<&str>,
        model: Option<&str>,
        url: Option<&str>,
        temp: Option<&str>,
    ) -> Result<Config> {
        Config::from_vars(
            key.map(String::from),
            model.map(String::from),
            url.map(String::from),
            temp.map(String::from),
        )
    }

    #[test]
    fn defaults_applied() {
        let config = vars(Some("sk-test"), Some("gpt-4o-mini"), None, None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn missing_api_key_is_configuration_error() {
        let err = vars(None, Some("gpt-4o-mini"), None, None).unwrap_err();
        assert!(matches!(err, ConverseError::Configuration(_)));
    }

    #[test]
    fn empty_api_key_is_configuration_error() {
        let err = vars(Some(""), Some("gpt-4o-mini"), None, None).unwrap_err();
        assert!(matches!(err, ConverseError::Configuration(_)));
    }

    #[test]
    fn missing_model_is_configuration_error() {
        let err = vars(Some("sk-test"), None, None, None).unwrap_err();
        assert!(matches!(err, ConverseError::Configuration(_)));
    }

    #[test]
    fn overrides_applied() {
        let config = vars(
            Some("sk-test"),
            Some("gpt-4o-mini"),
            Some("http://localhost:8080/v1"),
            Some("0.7"),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn unparseable_temperature_is_configuration_error() {
        let err = vars(Some("sk-test"), Some("gpt-4o-mini"), None, Some("warm")).unwrap_err();
        assert!(matches!(err, ConverseError::Configuration(_)));
    }
}
