//! JSON channel list
//!
//! The document is a single object, so records are collected and the whole
//! list is serialized on `finish`:
//!
//! ```json
//! { "channels": { "rows": [ { "name": "...", "number": 1, ... } ] } }
//! ```

use std::io::{self, Write};

use serde::Serialize;

use super::ChannelRenderer;
use crate::channels::record::ChannelRecord;

#[derive(Serialize)]
struct Document<'a> {
    channels: Rows<'a>,
}

#[derive(Serialize)]
struct Rows<'a> {
    rows: &'a [ChannelRecord],
}

/// Buffers records and writes them as one JSON document
pub struct JsonRenderer<W> {
    out: W,
    rows: Vec<ChannelRecord>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> ChannelRenderer for JsonRenderer<W> {
    fn init(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn add_channel(&mut self, record: ChannelRecord) -> io::Result<()> {
        self.rows.push(record);
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> io::Result<()> {
        let document = Document {
            channels: Rows { rows: &self.rows },
        };
        serde_json::to_writer(&mut self.out, &document)?;
        self.out.flush()
    }
}
