//! CLI configuration.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use masseria_cart::CartConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart behavior.
    #[serde(default)]
    pub cart: CartConfig,

    /// Order endpoint connection.
    #[serde(default)]
    pub http: HttpConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Environment-specific overrides.
    #[serde(default)]
    pub environments: HashMap<String, EnvironmentConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Get environment-specific config. Each table present under the
    /// environment replaces the top-level one.
    pub fn for_environment(&self, env: &str) -> Result<CliConfig> {
        let env_config = self
            .environments
            .get(env)
            .with_context(|| format!("Unknown environment: {}", env))?;

        let mut config = self.clone();
        if let Some(ref cart) = env_config.cart {
            config.cart = cart.clone();
        }
        if let Some(ref http) = env_config.http {
            config.http = http.clone();
        }
        if let Some(ref storage) = env_config.storage {
            config.storage = storage.clone();
        }
        Ok(config)
    }
}

/// HTTP settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL the order endpoint is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".masseria".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Environment-specific configuration overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

/// Generate a default masseria.toml config file.
pub fn generate_default_config() -> String {
    r#"# Masseria cart configuration

[cart]
storage_key = "carrito"
currency = "PEN"
endpoint = "insertar_pedido.php"
default_redirect = "index.html"
redirect_delay_ms = 3000

[http]
base_url = "http://localhost:8080/"
timeout_secs = 10

[storage]
dir = ".masseria"

[environments.staging.http]
base_url = "http://localhost:8081/"
timeout_secs = 20
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.cart, CartConfig::default());
        assert_eq!(config.http, HttpConfig::default());
        assert_eq!(config.storage.dir, ".masseria");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.cart.endpoint, "insertar_pedido.php");
        assert_eq!(config.http.timeout(), Duration::from_secs(10));
        assert!(config.environments.contains_key("staging"));
    }

    #[test]
    fn test_environment_override() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        let staging = config.for_environment("staging").unwrap();
        assert_eq!(staging.http.base_url, "http://localhost:8081/");
        assert_eq!(staging.http.timeout_secs, 20);
        assert_eq!(staging.cart, config.cart);

        assert!(config.for_environment("production").is_err());
    }

    #[test]
    fn test_partial_cart_table() {
        let config: CliConfig = toml::from_str(
            r#"
            [cart]
            endpoint = "api/pedidos"
            "#,
        )
        .unwrap();
        assert_eq!(config.cart.endpoint, "api/pedidos");
        assert_eq!(config.cart.storage_key, "carrito");
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("masseria.toml");
        let json_path = dir.path().join("masseria.json");
        std::fs::write(&toml_path, "[http]\nbase_url = \"https://masseria.pe/\"\n").unwrap();
        std::fs::write(&json_path, r#"{"http": {"base_url": "https://masseria.pe/"}}"#).unwrap();

        for path in [toml_path, json_path] {
            let loaded = CliConfig::load(path.to_str().unwrap()).unwrap();
            assert_eq!(loaded.http.base_url, "https://masseria.pe/");
            assert_eq!(loaded.http.timeout_secs, 10);
            assert_eq!(loaded.cart, CartConfig::default());
        }
    }
}
