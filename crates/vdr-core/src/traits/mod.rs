//! Ports the domain needs from its host

mod channel_source;

pub use channel_source::ChannelSource;
