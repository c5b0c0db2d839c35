//! Application state
//!
//! Holds the shared state for the Axum application: the recorder's channel
//! list and the configuration.

use std::sync::Arc;

use vdr_common::AppConfig;
use vdr_core::ChannelSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only channel list owned by the recorder
    channels: Arc<dyn ChannelSource>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(channels: Arc<dyn ChannelSource>, config: AppConfig) -> Self {
        Self {
            channels,
            config: Arc::new(config),
        }
    }

    /// Get the channel source
    pub fn channels(&self) -> &dyn ChannelSource {
        self.channels.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("channels", &"ChannelSource")
            .field("config", &self.config)
            .finish()
    }
}
