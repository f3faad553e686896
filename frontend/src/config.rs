use std::env;

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

const API_BASE_VAR: &str = "HEALTHSMART_API_BASE";
const USE_MOCK_VAR: &str = "HEALTHSMART_USE_MOCK";

/// Where API calls are answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Real HTTP requests against the backend.
    Live,
    /// Fabricated responses for offline UI development.
    Mock,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HEALTHSMART_USE_MOCK must be true or false, got {0:?}")]
    InvalidMockFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub mode: ApiMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, ApiMode::Live)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, mode: ApiMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            mode,
        }
    }

    /// Reads the process environment at runtime.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(API_BASE_VAR).ok();
        let use_mock = env::var(USE_MOCK_VAR).ok();
        Self::from_values(base_url.as_deref(), use_mock.as_deref())
    }

    /// Reads the same variables as `from_env`, captured when the crate was
    /// compiled. The browser has no process environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("HEALTHSMART_API_BASE"), option_env!("HEALTHSMART_USE_MOCK"))
    }

    fn from_values(base_url: Option<&str>, use_mock: Option<&str>) -> Result<Self, ConfigError> {
        let mode = match use_mock {
            Some(flag) => parse_mode(flag)?,
            None => ApiMode::Live,
        };
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        Ok(Self::new(base_url, mode))
    }
}

fn parse_mode(flag: &str) -> Result<ApiMode, ConfigError> {
    match flag.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(ApiMode::Mock),
        "false" | "0" | "no" | "" => Ok(ApiMode::Live),
        _ => Err(ConfigError::InvalidMockFlag(flag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure config tests run serially (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var(API_BASE_VAR);
        env::remove_var(USE_MOCK_VAR);
    }

    #[test]
    fn test_config_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = ClientConfig::from_env().unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.mode, ApiMode::Live);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        env::set_var(API_BASE_VAR, "https://health.example.org/api/");
        env::set_var(USE_MOCK_VAR, "TRUE");

        let config = ClientConfig::from_env().unwrap();

        assert_eq!(config.base_url, "https://health.example.org/api");
        assert_eq!(config.mode, ApiMode::Mock);

        // Clean up
        clear_env();
    }

    #[test]
    fn test_config_rejects_bad_mock_flag() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        env::set_var(USE_MOCK_VAR, "sometimes");

        assert_eq!(
            ClientConfig::from_env(),
            Err(ConfigError::InvalidMockFlag("sometimes".to_string()))
        );

        clear_env();
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("1"), Ok(ApiMode::Mock));
        assert_eq!(parse_mode("yes"), Ok(ApiMode::Mock));
        assert_eq!(parse_mode("false"), Ok(ApiMode::Live));
        assert_eq!(parse_mode(" no "), Ok(ApiMode::Live));
        assert!(parse_mode("maybe").is_err());
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        let config = ClientConfig::from_values(Some("  "), None).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
    }
}
