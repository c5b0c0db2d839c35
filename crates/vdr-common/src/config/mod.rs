//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ChannelsConfig, ConfigError, CorsConfig, Environment,
    RateLimitConfig, ServerConfig,
};
