//! # vdr-core
//!
//! Domain layer containing the channel model, its value objects, the
//! channel source port, and the `channels.conf` loader.
//! This crate has zero dependencies on infrastructure (web framework, etc.).

pub mod channels_conf;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Channel, ChannelList};
pub use error::DomainError;
pub use traits::ChannelSource;
pub use value_objects::{ChannelId, Source, SourceParseError};
