//! Startup configuration: where the history backend lives.

use std::env;

/// Name of the variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "WALLET_HISTORY_BACKEND_URL";

/// Used when neither the runtime nor the build environment sets a URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration read once when the app starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    backend_url: String,
}

impl AppConfig {
    /// Creates a config for the given base URL. A trailing `/` is dropped so
    /// that endpoint paths can be appended directly.
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        let trimmed = backend_url.trim().trim_end_matches('/');
        Self {
            backend_url: trimmed.to_string(),
        }
    }

    /// Builds the config from the environment, with an in-code default.
    ///
    /// # Environment Variables
    /// - `WALLET_HISTORY_BACKEND_URL`: base URL of the backend. The runtime
    ///   value wins on native targets. In the browser there is no process
    ///   environment, so the value captured when the crate was compiled is
    ///   used instead.
    pub fn from_env() -> Self {
        let config = Self::resolve(
            env::var(BACKEND_URL_VAR).ok(),
            option_env!("WALLET_HISTORY_BACKEND_URL"),
        );
        dioxus_logger::tracing::info!("backend url: {}", config.backend_url);
        config
    }

    /// Picks the first non-blank of the runtime and build-time values,
    /// falling back to [`DEFAULT_BACKEND_URL`].
    fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let url = runtime
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|v| !v.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::new(url)
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Joins `path` onto the backend base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = AppConfig::new("https://api.example.com/");
        assert_eq!(config.backend_url(), "https://api.example.com");
        assert_eq!(
            config.endpoint("/wallet-history/"),
            "https://api.example.com/wallet-history/"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = AppConfig::new("https://example.com/backend");
        assert_eq!(
            config.endpoint("wallet-history/"),
            "https://example.com/backend/wallet-history/"
        );
    }

    #[test]
    fn runtime_value_wins() {
        let config = AppConfig::resolve(
            Some("https://runtime.example.com".to_string()),
            Some("https://build.example.com"),
        );
        assert_eq!(config.backend_url(), "https://runtime.example.com");
    }

    #[test]
    fn blank_values_fall_through() {
        let config = AppConfig::resolve(Some("  ".to_string()), Some("https://build.example.com"));
        assert_eq!(config.backend_url(), "https://build.example.com");

        let config = AppConfig::resolve(None, Some(""));
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);

        let config = AppConfig::resolve(Some(String::new()), Some(" "));
        assert_eq!(config.backend_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(AppConfig::default().backend_url(), DEFAULT_BACKEND_URL);
    }
}
