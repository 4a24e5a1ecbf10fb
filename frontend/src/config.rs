//! Application configuration.
//!
//! Centralized configuration for the HeartCare upload page. The prediction
//! service URL is baked in at build time from `HEARTCARE_API_URL`
//! (e.g. `HEARTCARE_API_URL=https://api.example.com trunk build`) and handed
//! to components explicitly.

/// Application name, shown in the header and the page title.
pub const APP_NAME: &str = "HeartCare";

/// Static sample file offered for download.
pub const SAMPLE_CSV_PATH: &str = "/sample_ecg.csv";

/// Runtime settings injected into the components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Prediction service base URL, `None` when the build did not set one
    pub api_url: Option<String>,
}

impl AppConfig {
    pub fn new(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        Self { api_url }
    }

    /// Read `HEARTCARE_API_URL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("HEARTCARE_API_URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_unset() {
        assert_eq!(AppConfig::new(Some("")).api_url, None);
        assert_eq!(AppConfig::new(None), AppConfig::default());
    }

    #[test]
    fn test_url_kept() {
        let config = AppConfig::new(Some("https://api.heartcare.test "));
        assert_eq!(config.api_url.as_deref(), Some("https://api.heartcare.test"));
    }
}
