//! Ordered channel collection

use crate::entities::Channel;
use crate::traits::ChannelSource;

/// All channels (and group separators) in list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelList {
    channels: Vec<Channel>,
}

impl ChannelList {
    #[must_use]
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// Number of entries, separators included
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of entries that are real channels
    #[must_use]
    pub fn real_channel_count(&self) -> usize {
        self.channels.iter().filter(|c| !c.is_group_sep()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Channel> {
        self.channels.iter()
    }
}

impl FromIterator<Channel> for ChannelList {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChannelList {
    type Item = &'a Channel;
    type IntoIter = std::slice::Iter<'a, Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ChannelSource for ChannelList {
    fn channels(&self) -> Box<dyn Iterator<Item = &Channel> + '_> {
        Box::new(self.iter())
    }
}
