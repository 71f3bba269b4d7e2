//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
///
/// Every field has a default, so a partial config file (or none at all)
/// still yields a runnable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by the CORS policy
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from("config/server")
    }

    /// Load configuration from a specific config file basename
    pub fn load_from(name: &str) -> anyhow::Result<Self> {
        let config_result = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("HEXFORGE"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(_) => {
                // Use default config if no config file found
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_server_config_clone() {
        let config = ServerConfig::default();
        let cloned = config.clone();

        assert_eq!(config.host, cloned.host);
        assert_eq!(config.port, cloned.port);
        assert_eq!(config.allowed_origins, cloned.allowed_origins);
    }

    #[test]
    fn test_server_config_debug_format() {
        let config = ServerConfig::default();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("127.0.0.1"));
        assert!(debug_str.contains("8080"));
    }

    #[test]
    fn test_partial_config_falls_back_to_field_defaults() {
        let json = r#"{"host": "0.0.0.0", "port": 3000}"#;
        let config: ServerConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.log_level, "info");
    }
}
