//! Domain entities

mod channel;
mod channel_list;

pub use channel::Channel;
pub use channel_list::ChannelList;
