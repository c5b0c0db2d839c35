//! Channel entity - a tunable TV/radio service or a group separator

use crate::value_objects::{ChannelId, Source};

/// Channel entity as known to the recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub short_name: Option<String>,
    pub provider: Option<String>,
    /// Logical number, assigned in list order
    pub number: i32,
    /// Frequency as written in `channels.conf` (MHz, kHz or Hz)
    pub frequency: i32,
    /// Delivery-system parameter string (polarization, modulation, ...)
    pub parameters: String,
    pub source: Source,
    pub nid: u16,
    pub tid: u16,
    pub sid: u16,
    pub rid: u16,
    group_sep: bool,
}

impl Channel {
    /// Create a new channel with no transport parameters set
    #[must_use]
    pub fn new(name: impl Into<String>, number: i32, source: Source) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            provider: None,
            number,
            frequency: 0,
            parameters: String::new(),
            source,
            nid: 0,
            tid: 0,
            sid: 0,
            rid: 0,
            group_sep: false,
        }
    }

    /// Create a group separator entry
    ///
    /// `number` is the number the next real channel starts at, or 0 if the
    /// separator doesn't renumber.
    #[must_use]
    pub fn separator(name: impl Into<String>, number: i32) -> Self {
        Self {
            group_sep: true,
            ..Self::new(name, number, Source::None)
        }
    }

    /// Set the transport stream coordinates
    #[must_use]
    pub fn with_ids(mut self, nid: u16, tid: u16, sid: u16, rid: u16) -> Self {
        self.nid = nid;
        self.tid = tid;
        self.sid = sid;
        self.rid = rid;
        self
    }

    /// Set the tuning frequency and parameter string
    #[must_use]
    pub fn with_tuning(mut self, frequency: i32, parameters: impl Into<String>) -> Self {
        self.frequency = frequency;
        self.parameters = parameters.into();
        self
    }

    /// Canonical channel id
    #[must_use]
    pub fn id(&self) -> ChannelId {
        ChannelId::new(self.source, self.nid, self.tid, self.sid, self.rid)
    }

    /// Transponder identifier derived from the frequency
    ///
    /// The frequency is scaled down to MHz. Satellite transponders sharing a
    /// frequency are told apart by polarization, which is folded into the
    /// value (`H` +100000, `V` +200000, `L` +300000, `R` +400000).
    #[must_use]
    pub fn transponder(&self) -> i32 {
        let mut tf = self.frequency;
        while tf > 20000 {
            tf /= 1000;
        }
        if self.is_sat() {
            let polarization = self
                .parameters
                .chars()
                .find(|c| matches!(c.to_ascii_uppercase(), 'H' | 'V' | 'L' | 'R'));
            if let Some(p) = polarization {
                tf = Self::transponder_with_polarization(tf, p);
            }
        }
        tf
    }

    fn transponder_with_polarization(frequency: i32, polarization: char) -> i32 {
        match polarization.to_ascii_uppercase() {
            'H' => frequency + 100_000,
            'V' => frequency + 200_000,
            'L' => frequency + 300_000,
            'R' => frequency + 400_000,
            _ => frequency,
        }
    }

    /// Check if this entry only marks a group boundary
    #[inline]
    #[must_use]
    pub fn is_group_sep(&self) -> bool {
        self.group_sep
    }

    #[inline]
    #[must_use]
    pub fn is_atsc(&self) -> bool {
        self.source.is_atsc()
    }

    #[inline]
    #[must_use]
    pub fn is_cable(&self) -> bool {
        self.source.is_cable()
    }

    #[inline]
    #[must_use]
    pub fn is_sat(&self) -> bool {
        self.source.is_sat()
    }

    #[inline]
    #[must_use]
    pub fn is_terr(&self) -> bool {
        self.source.is_terr()
    }
}
