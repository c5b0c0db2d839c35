//! Channel list endpoint
//!
//! `GET /channels.{json,html,xml}` renders every channel of the recorder, in
//! list order and without group separators, in the selected format.

mod error;
mod format;
mod record;
pub mod render;

use std::io::Write;

use axum::http::Method;
use tracing::{debug, warn};
use vdr_core::ChannelSource;

pub use error::ChannelsError;
pub use format::{select_format, OutputFormat, CHANNELS_PREFIX};
pub use record::{ChannelRecord, STREAM_SUFFIX};

/// Renders the channel list for one request
pub struct ChannelsResponder<'a> {
    source: &'a dyn ChannelSource,
}

impl<'a> ChannelsResponder<'a> {
    pub fn new(source: &'a dyn ChannelSource) -> Self {
        Self { source }
    }

    /// Write the channel document for `method` and `path` to `out`
    ///
    /// Returns the selected format so the caller can declare the content
    /// type. Rejected requests leave `out` untouched and never read the
    /// channel source.
    pub fn reply<W: Write>(
        &self,
        out: &mut W,
        method: &Method,
        path: &str,
    ) -> Result<OutputFormat, ChannelsError> {
        let format = select_format(method, path).inspect_err(|e| {
            warn!(%method, path, reason = %e, "Channel list request rejected");
        })?;
        debug!(?format, path, "Rendering channel list");

        let mut renderer = format.renderer(out);
        renderer.init()?;

        let mut count = 0usize;
        for record in self
            .source
            .channels()
            .filter(|channel| !channel.is_group_sep())
            .map(ChannelRecord::from)
        {
            renderer.add_channel(record)?;
            count += 1;
        }

        renderer.finish()?;
        debug!(?format, count, "Channel list rendered");

        Ok(format)
    }
}
