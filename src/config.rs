//! Application configuration loaded from environment variables.

use std::env;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the health API
    pub api_base_url: String,
    /// Directory for the local fallback cache
    pub data_dir: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3001".to_string(),
            data_dir: "data".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored when present. Every variable has a
    /// local-development default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("API_BASE_URL", "http://api.test:9000");
        env::set_var("DATA_DIR", "/tmp/gluco-test");

        let config = Config::from_env();

        assert_eq!(config.api_base_url, "http://api.test:9000");
        assert_eq!(config.data_dir, "/tmp/gluco-test");

        env::remove_var("API_BASE_URL");
        env::remove_var("DATA_DIR");
    }
}
