//! Channel source port
//!
//! The recorder owns the channel list; consumers only ever read it, front to
//! back, through this trait.

use std::sync::Arc;

use crate::entities::Channel;

/// Read-only, ordered view of the recorder's channels
///
/// Iteration yields group separators as well; callers filter them with
/// [`Channel::is_group_sep`].
pub trait ChannelSource: Send + Sync {
    /// Iterate all entries in list order
    fn channels(&self) -> Box<dyn Iterator<Item = &Channel> + '_>;
}

impl<T: ChannelSource + ?Sized> ChannelSource for Arc<T> {
    fn channels(&self) -> Box<dyn Iterator<Item = &Channel> + '_> {
        (**self).channels()
    }
}
