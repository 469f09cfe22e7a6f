//! Layered configuration: `config/default`, `config/local`, then `APP__*` variables

mod app_config;

pub use app_config::{
    AppConfig, AssetsConfig, LogFormat, LoggingConfig, ProviderConfig, ServerConfig,
};
