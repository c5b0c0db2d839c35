//! Channel list renderers
//!
//! A renderer is driven as `init`, then `add_channel` once per record, then
//! `finish`, which consumes it.

mod html;
mod json;
mod xml;

use std::io;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use xml::{escape_xml, XmlRenderer, CHANNELS_XML_NAMESPACE};

use super::record::ChannelRecord;

/// Format-specific sink for channel records
pub trait ChannelRenderer {
    /// Write the document preamble
    fn init(&mut self) -> io::Result<()>;

    /// Render one channel
    fn add_channel(&mut self, record: ChannelRecord) -> io::Result<()>;

    /// Close the document and flush the output
    fn finish(self: Box<Self>) -> io::Result<()>;
}
