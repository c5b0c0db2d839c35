//! Errors of the channel listing endpoint

use axum::http::StatusCode;
use thiserror::Error;

/// Why a channel list request was not served
#[derive(Debug, Error)]
pub enum ChannelsError {
    #[error("To retrieve information use the GET method!")]
    MethodNotAllowed,

    #[error("Resources are not available for the selected format. (Use: .json, .html or .xml)")]
    UnsupportedFormat,

    #[error("Failed to write channel list: {0}")]
    Io(#[from] std::io::Error),
}

impl ChannelsError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed | Self::UnsupportedFormat => StatusCode::FORBIDDEN,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            Self::Io(_) => "RENDER_ERROR",
        }
    }
}
