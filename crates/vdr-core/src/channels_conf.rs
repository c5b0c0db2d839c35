//! `channels.conf` loader
//!
//! One entry per line:
//!
//! ```text
//! NAME[,SHORT][;PROVIDER]:FREQ:PARAMS:SOURCE:SRATE:VPID:APID:TPID:CAID:SID:NID:TID:RID
//! :GROUP NAME
//! :@100 GROUP NAME
//! ```
//!
//! Lines starting with `:` are group separators; `@N` makes the next channel
//! number `N`. Channels are otherwise numbered from 1 in file order. A `|` in
//! a name stands for `:`.

use std::path::Path;

use encoding_rs::Encoding;

use crate::entities::{Channel, ChannelList};
use crate::error::DomainError;
use crate::value_objects::Source;

/// Number of `:`-separated fields in a channel line
const FIELD_COUNT: usize = 13;

/// Read and parse a `channels.conf` file written in `charset`
pub fn load(path: impl AsRef<Path>, charset: &str) -> Result<ChannelList, DomainError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DomainError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let text = decode(&bytes, charset)?;
    parse(&text)
}

/// Decode raw file contents to UTF-8
///
/// Malformed sequences are replaced with U+FFFD.
pub fn decode(bytes: &[u8], charset: &str) -> Result<String, DomainError> {
    let encoding = Encoding::for_label(charset.trim().as_bytes())
        .ok_or_else(|| DomainError::UnknownCharset(charset.to_string()))?;
    let (text, _, _) = encoding.decode(bytes);
    Ok(text.into_owned())
}

/// Parse the text of a `channels.conf` file
pub fn parse(text: &str) -> Result<ChannelList, DomainError> {
    let mut channels = Vec::new();
    // None once the numbering has run past i32::MAX
    let mut next_number = Some(1i32);

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(group) = line.strip_prefix(':') {
            let separator = parse_separator(group, index + 1)?;
            if separator.number > 0 {
                next_number = Some(separator.number);
            }
            channels.push(separator);
        } else {
            let number = next_number
                .ok_or_else(|| DomainError::channels_conf(index + 1, "channel number out of range"))?;
            let channel = parse_channel(line, number, index + 1)?;
            next_number = number.checked_add(1);
            channels.push(channel);
        }
    }

    Ok(ChannelList::new(channels))
}

fn parse_separator(group: &str, line: usize) -> Result<Channel, DomainError> {
    let Some(numbered) = group.strip_prefix('@') else {
        return Ok(Channel::separator(decode_name(group.trim()), 0));
    };

    let digits_end = numbered
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(numbered.len());
    let number: i32 = numbered[..digits_end]
        .parse()
        .map_err(|_| DomainError::channels_conf(line, "invalid group number"))?;
    if number < 1 {
        return Err(DomainError::channels_conf(line, "group number must be positive"));
    }

    Ok(Channel::separator(
        decode_name(numbered[digits_end..].trim()),
        number,
    ))
}

fn parse_channel(text: &str, number: i32, line: usize) -> Result<Channel, DomainError> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DomainError::channels_conf(
            line,
            format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        ));
    }

    let (names, provider) = match fields[0].split_once(';') {
        Some((names, provider)) => (names, Some(decode_name(provider))),
        None => (fields[0], None),
    };
    let (name, short_name) = match names.split_once(',') {
        Some((name, short)) => (decode_name(name), Some(decode_name(short))),
        None => (decode_name(names), None),
    };
    if name.is_empty() {
        return Err(DomainError::channels_conf(line, "empty channel name"));
    }

    let frequency: i32 = parse_field(fields[1], "frequency", line)?;
    let source = fields[3]
        .parse::<Source>()
        .map_err(|e| DomainError::channels_conf(line, e.to_string()))?;
    let sid: u16 = parse_field(fields[9], "SID", line)?;
    let nid: u16 = parse_field(fields[10], "NID", line)?;
    let tid: u16 = parse_field(fields[11], "TID", line)?;
    let rid: u16 = parse_field(fields[12], "RID", line)?;

    let mut channel = Channel::new(name, number, source)
        .with_tuning(frequency, fields[2])
        .with_ids(nid, tid, sid, rid);
    channel.short_name = short_name;
    channel.provider = provider;
    Ok(channel)
}

fn parse_field<T: std::str::FromStr>(value: &str, what: &str, line: usize) -> Result<T, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::channels_conf(line, format!("invalid {what} '{value}'")))
}

fn decode_name(name: &str) -> String {
    name.replace('|', ":")
}
