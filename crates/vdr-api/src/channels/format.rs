//! Output format selection
//!
//! The format is chosen by the file-extension suffix of the request path:
//! `/channels.json`, `/channels.html` or `/channels.xml`.

use std::io::Write;

use axum::http::Method;

use super::error::ChannelsError;
use super::render::{ChannelRenderer, HtmlRenderer, JsonRenderer, XmlRenderer};

/// Path prefix stripped before the suffix is inspected
pub const CHANNELS_PREFIX: &str = "/channels";

/// Serialization of the channel list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
    Xml,
}

impl OutputFormat {
    /// Formats in the order their suffixes are matched
    pub const ALL: [Self; 3] = [Self::Json, Self::Html, Self::Xml];

    /// Path suffix selecting this format
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Html => ".html",
            Self::Xml => ".xml",
        }
    }

    /// `Content-Type` header value of the rendered document
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
            Self::Xml => "text/xml; charset=utf-8",
        }
    }

    /// Create the renderer for this format, writing to `out`
    pub fn renderer<'a, W: Write + 'a>(self, out: W) -> Box<dyn ChannelRenderer + 'a> {
        match self {
            Self::Json => Box::new(JsonRenderer::new(out)),
            Self::Html => Box::new(HtmlRenderer::new(out)),
            Self::Xml => Box::new(XmlRenderer::new(out)),
        }
    }
}

/// Decide the output format for a request
///
/// Only `GET` is served. The `/channels` prefix is stripped and the rest of
/// the path must end in one of the supported suffixes.
pub fn select_format(method: &Method, path: &str) -> Result<OutputFormat, ChannelsError> {
    if *method != Method::GET {
        return Err(ChannelsError::MethodNotAllowed);
    }

    let params = path.strip_prefix(CHANNELS_PREFIX).unwrap_or(path);

    OutputFormat::ALL
        .into_iter()
        .find(|format| params.ends_with(format.extension()))
        .ok_or(ChannelsError::UnsupportedFormat)
}
