//! Signal source - the delivery system a channel is received through
//!
//! `channels.conf` encodes the source as a single letter, with satellites
//! carrying their orbital position:
//! - `A`: ATSC
//! - `C`: cable (DVB-C)
//! - `S19.2E`: satellite (DVB-S) at 19.2 degrees east
//! - `T`: terrestrial (DVB-T)

use std::fmt;
use std::str::FromStr;

/// Broadcast delivery system of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    /// No source (group separators)
    #[default]
    None,
    Atsc,
    Cable,
    /// Satellite at an orbital position given in tenths of a degree
    Sat { position: u16, east: bool },
    Terr,
}

impl Source {
    /// Create a satellite source from a position in tenths of a degree
    #[inline]
    #[must_use]
    pub const fn sat(position: u16, east: bool) -> Self {
        Self::Sat { position, east }
    }

    #[inline]
    #[must_use]
    pub fn is_atsc(self) -> bool {
        matches!(self, Self::Atsc)
    }

    #[inline]
    #[must_use]
    pub fn is_cable(self) -> bool {
        matches!(self, Self::Cable)
    }

    #[inline]
    #[must_use]
    pub fn is_sat(self) -> bool {
        matches!(self, Self::Sat { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_terr(self) -> bool {
        matches!(self, Self::Terr)
    }
}

/// Error when parsing a source code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceParseError {
    #[error("empty source")]
    Empty,

    #[error("unknown source type '{0}'")]
    UnknownType(char),

    #[error("invalid orbital position '{0}'")]
    InvalidPosition(String),
}

impl FromStr for Source {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let kind = chars.next().ok_or(SourceParseError::Empty)?;
        match kind.to_ascii_uppercase() {
            'A' => Ok(Self::Atsc),
            'C' => Ok(Self::Cable),
            'T' => Ok(Self::Terr),
            'S' => parse_orbital_position(chars.as_str()),
            other => Err(SourceParseError::UnknownType(other)),
        }
    }
}

/// Parse the `19.2E` part of a satellite source
fn parse_orbital_position(s: &str) -> Result<Source, SourceParseError> {
    let invalid = || SourceParseError::InvalidPosition(s.to_string());

    let (degrees, east) = match s.char_indices().last() {
        Some((i, 'E' | 'e')) => (&s[..i], true),
        Some((i, 'W' | 'w')) => (&s[..i], false),
        _ => return Err(invalid()),
    };

    let (whole, tenths) = match degrees.split_once('.') {
        Some((whole, frac)) if frac.len() == 1 => (whole, frac),
        Some(_) => return Err(invalid()),
        None => (degrees, "0"),
    };

    let whole: u16 = whole.parse().map_err(|_| invalid())?;
    let tenths: u16 = tenths.parse().map_err(|_| invalid())?;
    if whole > 180 {
        return Err(invalid());
    }

    Ok(Source::sat(whole * 10 + tenths, east))
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("0"),
            Self::Atsc => f.write_str("A"),
            Self::Cable => f.write_str("C"),
            Self::Terr => f.write_str("T"),
            Self::Sat { position, east } => write!(
                f,
                "S{}.{}{}",
                position / 10,
                position % 10,
                if *east { 'E' } else { 'W' }
            ),
        }
    }
}
