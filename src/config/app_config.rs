use serde::Deserialize;

use crate::domain::PLACEHOLDER_IMAGE_URL;
use crate::infrastructure::observability::MetricsConfig;
use crate::infrastructure::pokeapi::DEFAULT_POKEAPI_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Upstream Pokémon provider
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
}

/// Locally hosted files
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served under `/sounds`, holding `{id}.ogg`
    pub sounds_dir: String,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Image used when a record has no artwork at all
    pub placeholder_image: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            sounds_dir: "public/sounds".to_string(),
            static_dir: "public/static".to_string(),
            placeholder_image: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.assets.sounds_dir, "public/sounds");
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "port": 3000 },
            "logging": { "format": "json" },
            "provider": { "base_url": "http://localhost:9000/api/v2" }
        }))
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.provider.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.assets.static_dir, "public/static");
    }
}
