//! HTML channel list
//!
//! Names are written as-is, without entity escaping.

use std::io::{self, Write};

use super::ChannelRenderer;
use crate::channels::record::ChannelRecord;

const HTML_HEADER: &str = "<html><head>\
<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\" />\
</head><body>";

/// Renders the channel names as an unordered list
pub struct HtmlRenderer<W> {
    out: W,
}

impl<W: Write> HtmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ChannelRenderer for HtmlRenderer<W> {
    fn init(&mut self) -> io::Result<()> {
        self.out.write_all(HTML_HEADER.as_bytes())?;
        self.out.write_all(b"<ul>")
    }

    fn add_channel(&mut self, record: ChannelRecord) -> io::Result<()> {
        writeln!(self.out, "<li>{}</li>", record.name)
    }

    fn finish(mut self: Box<Self>) -> io::Result<()> {
        self.out.write_all(b"</ul>")?;
        self.out.write_all(b"</body></html>")?;
        self.out.flush()
    }
}
