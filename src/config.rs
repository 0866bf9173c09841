//! Application configuration loaded from environment variables.
//!
//! Values are read once at startup. A `.env` file is honoured for local
//! development.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// GCP / Firebase project ID (Firestore)
    pub gcp_project_id: String,
    /// Identity Toolkit REST base URL (overridable for the Auth emulator)
    pub identity_api_url: String,
    /// Search API endpoint
    pub search_api_url: String,
    /// Per-request budget for match enrichment calls
    pub search_timeout: Duration,
    /// Origin of the rendering shell, allowed by CORS
    pub shell_origin: String,
    /// Server port
    pub port: u16,
    /// Keep team selections in memory instead of Firestore
    pub use_memory_store: bool,

    // --- Secrets ---
    /// Firebase Web API key
    pub firebase_api_key: String,
    /// Search API key
    pub search_api_key: String,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            identity_api_url: "http://127.0.0.1:9099/identitytoolkit.googleapis.com/v1"
                .to_string(),
            search_api_url: "http://127.0.0.1:9/search.json".to_string(),
            search_timeout: Duration::from_secs(2),
            shell_origin: "http://localhost:8081".to_string(),
            port: 8080,
            use_memory_store: true,
            firebase_api_key: "test_firebase_key".to_string(),
            search_api_key: "test_search_key".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let search_timeout_secs = match env::var("SEARCH_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("SEARCH_TIMEOUT_SECS", raw))?,
            Err(_) => 10,
        };

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            identity_api_url: env::var("IDENTITY_API_URL")
                .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com/v1".to_string()),
            search_api_url: env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| "https://serpapi.com/search.json".to_string()),
            search_timeout: Duration::from_secs(search_timeout_secs),
            shell_origin: env::var("SHELL_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            use_memory_store: env::var("USE_MEMORY_STORE")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),

            firebase_api_key: env::var("FIREBASE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FIREBASE_API_KEY"))?,
            search_api_key: env::var("SEARCH_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SEARCH_API_KEY"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases live in one test: the process environment is shared
    // between test threads.
    #[test]
    fn test_config_from_env() {
        env::set_var("FIREBASE_API_KEY", " test_key ");
        env::set_var("SEARCH_API_KEY", "search_key");
        env::remove_var("SEARCH_TIMEOUT_SECS");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.firebase_api_key, "test_key");
        assert_eq!(config.search_api_key, "search_key");
        assert_eq!(config.search_timeout, Duration::from_secs(10));
        assert_eq!(config.port, 8080);

        env::set_var("SEARCH_TIMEOUT_SECS", "soon");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("SEARCH_TIMEOUT_SECS", _)));
        env::remove_var("SEARCH_TIMEOUT_SECS");
    }
}
