//! Channel record - the flat, format-neutral view of one channel

use serde::Serialize;
use vdr_core::Channel;

/// Suffix appended to the channel id to address its live stream
pub const STREAM_SUFFIX: &str = ".ts";

/// One row of the channel list
///
/// Field order is the order of the JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRecord {
    pub name: String,
    pub number: i32,
    pub transponder: i32,
    pub stream: String,
    pub is_atsc: bool,
    pub is_cable: bool,
    pub is_terr: bool,
    pub is_sat: bool,
}

impl From<&Channel> for ChannelRecord {
    fn from(channel: &Channel) -> Self {
        Self {
            name: channel.name.clone(),
            number: channel.number,
            transponder: channel.transponder(),
            stream: format!("{}{STREAM_SUFFIX}", channel.id()),
            is_atsc: channel.is_atsc(),
            is_cable: channel.is_cable(),
            is_terr: channel.is_terr(),
            is_sat: channel.is_sat(),
        }
    }
}
