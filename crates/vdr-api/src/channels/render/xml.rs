//! XML channel list
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <channels xmlns="http://www.domain.org/restfulapi/2011/channels-xml">
//!  <channel>
//!   <param name="name">Das Erste HD</param>
//!   ...
//!  </channel>
//! </channels>
//! ```

use std::borrow::Cow;
use std::io::{self, Write};

use super::ChannelRenderer;
use crate::channels::record::ChannelRecord;

/// Namespace of the `<channels>` document
pub const CHANNELS_XML_NAMESPACE: &str = "http://www.domain.org/restfulapi/2011/channels-xml";

/// Replace the five predefined XML entities
///
/// Borrows the input when nothing needs escaping.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Streams one `<channel>` element per record
pub struct XmlRenderer<W> {
    out: W,
}

impl<W: Write> XmlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn param(&mut self, name: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "  <param name=\"{name}\">{value}</param>")
    }
}

impl<W: Write> ChannelRenderer for XmlRenderer<W> {
    fn init(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"
        )?;
        writeln!(self.out, "<channels xmlns=\"{CHANNELS_XML_NAMESPACE}\">")
    }

    fn add_channel(&mut self, record: ChannelRecord) -> io::Result<()> {
        writeln!(self.out, " <channel>")?;
        self.param("name", escape_xml(&record.name))?;
        self.param("number", record.number)?;
        self.param("transponder", record.transponder)?;
        self.param("stream", escape_xml(&record.stream))?;
        self.param("is_atsc", record.is_atsc)?;
        self.param("is_cable", record.is_cable)?;
        self.param("is_sat", record.is_sat)?;
        self.param("is_terr", record.is_terr)?;
        writeln!(self.out, " </channel>")
    }

    fn finish(mut self: Box<Self>) -> io::Result<()> {
        self.out.write_all(b"</channels>")?;
        self.out.flush()
    }
}
