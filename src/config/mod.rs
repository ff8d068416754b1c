//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppEnv, AppSettings, DatabaseConfig, ImportConfig, LogFormat, LoggingConfig,
    RenderMode, ServerConfig,
};
