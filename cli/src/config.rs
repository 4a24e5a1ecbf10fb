//! Client configuration.
//!
//! The only setting is the prediction service base URL. It comes from
//! `HEARTCARE_API_URL` (a `.env` file is honoured) and can be overridden on
//! the command line.

use std::env;

/// Environment variable holding the prediction service base URL.
pub const API_URL_VAR: &str = "HEARTCARE_API_URL";

/// Resolved client settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the prediction service, `None` when not configured
    pub api_url: Option<String>,
}

impl ClientConfig {
    /// Create a config; blank URLs count as not configured.
    pub fn new(api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        Self { api_url }
    }

    /// Read `HEARTCARE_API_URL`, loading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::new(env::var(API_URL_VAR).ok())
    }

    /// Replace the URL when `endpoint` is given.
    pub fn with_override(self, endpoint: Option<String>) -> Self {
        match endpoint {
            Some(url) => Self::new(Some(url)),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_unset() {
        assert_eq!(ClientConfig::new(Some("  ".into())).api_url, None);
        assert_eq!(ClientConfig::new(None).api_url, None);
    }

    #[test]
    fn test_url_trimmed() {
        let config = ClientConfig::new(Some(" http://localhost:5000 \n".into()));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:5000"));
    }

    #[test]
    fn test_override() {
        let config = ClientConfig::new(Some("http://env.test".into()));

        let same = config.clone().with_override(None);
        assert_eq!(same, config);

        let overridden = config.with_override(Some("http://flag.test".into()));
        assert_eq!(overridden.api_url.as_deref(), Some("http://flag.test"));
    }
}
