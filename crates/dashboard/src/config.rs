//! Client configuration.

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "STOCKSCAN_API_URL";

/// Where the inventory API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    api_url: String,
}

impl DashboardConfig {
    /// Create a config for `api_url`. A trailing `/` is dropped.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `STOCKSCAN_API_URL`, or fall back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(API_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute URL of an API endpoint, e.g. `endpoint("items")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.api_url(), "http://localhost:5000/api");
        assert_eq!(cfg.endpoint("items"), "http://localhost:5000/api/items");
        assert_eq!(cfg.endpoint("/scan"), "http://localhost:5000/api/scan");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = DashboardConfig::new("http://inventory.local/api/");
        assert_eq!(cfg.endpoint("items"), "http://inventory.local/api/items");
    }

    #[test]
    fn env_value_overrides_default() {
        let cfg = DashboardConfig::from_env_value(Some("http://10.0.0.7:5000/api".to_string()));
        assert_eq!(cfg.api_url(), "http://10.0.0.7:5000/api");
    }

    #[test]
    fn blank_env_value_falls_back_to_default() {
        assert_eq!(
            DashboardConfig::from_env_value(Some("  ".to_string())),
            DashboardConfig::default()
        );
        assert_eq!(DashboardConfig::from_env_value(None), DashboardConfig::default());
    }
}
