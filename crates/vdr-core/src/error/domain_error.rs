//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("channels.conf line {line}: {reason}")]
    ChannelsConf { line: usize, reason: String },

    #[error("Unknown charset: {0}")]
    UnknownCharset(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DomainError {
    /// Create a parse error for a `channels.conf` line (1-based)
    pub fn channels_conf(line: usize, reason: impl Into<String>) -> Self {
        Self::ChannelsConf {
            line,
            reason: reason.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ChannelsConf { .. } => "INVALID_CHANNELS_CONF",
            Self::UnknownCharset(_) => "UNKNOWN_CHARSET",
            Self::Io { .. } => "IO_ERROR",
        }
    }
}
