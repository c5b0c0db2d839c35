//! Channel ID - the canonical identifier of a channel
//!
//! Rendered as `SOURCE-NID-TID-SID`, with `-RID` appended when the radio id
//! is non-zero (e.g. `S19.2E-1-1019-10301` or `T-8468-514-769-1`).

use std::fmt;

use super::Source;

/// Canonical channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelId {
    pub source: Source,
    pub nid: u16,
    pub tid: u16,
    pub sid: u16,
    pub rid: u16,
}

impl ChannelId {
    #[must_use]
    pub const fn new(source: Source, nid: u16, tid: u16, sid: u16, rid: u16) -> Self {
        Self {
            source,
            nid,
            tid,
            sid,
            rid,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.source, self.nid, self.tid, self.sid)?;
        if self.rid != 0 {
            write!(f, "-{}", self.rid)?;
        }
        Ok(())
    }
}
