//! Inference gateway configuration.
//!
//! All values can be set via environment variables and fall back to working
//! defaults for the hosted Gemini endpoint:
//!
//! - `INFERENCE_API_KEY` (or legacy `GEMINI_API_KEY`): API key, no default
//! - `INFERENCE_BASE_URL`: default `https://generativelanguage.googleapis.com`
//! - `INFERENCE_MODEL`: default `gemini-2.5-flash`
//! - `INFERENCE_TIMEOUT_SECS`: per-request timeout, default 90

use std::env;

/// Connection settings for the hosted inference service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API key sent with every request. An empty key is allowed here so the
    /// offline paths (fallback data, `demo` subcommand) keep working; the
    /// remote call itself will be rejected by the service.
    pub api_key: String,
    /// Service origin, without a trailing slash.
    pub base_url: String,
    /// Model identifier appended to the generate endpoint path.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 90,
        }
    }
}

impl GatewayConfig {
    /// Creates a `GatewayConfig` from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("INFERENCE_API_KEY")
                .or_else(|_| env::var("GEMINI_API_KEY"))
                .unwrap_or(defaults.api_key),
            base_url: env::var("INFERENCE_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("INFERENCE_MODEL").unwrap_or(defaults.model),
            timeout_secs: env::var("INFERENCE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 90);
    }

    #[test]
    fn test_config_clone_equality() {
        let config = GatewayConfig::default();
        assert_eq!(config, config.clone());
    }
}
