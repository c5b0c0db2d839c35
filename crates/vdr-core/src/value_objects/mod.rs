//! Value objects - immutable types that describe a channel's identity

mod channel_id;
mod source;

pub use channel_id::ChannelId;
pub use source::{Source, SourceParseError};
