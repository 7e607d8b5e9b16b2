use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::ob::{fein, fynd};
use crate::phonemes::{prefix_index, suffix_index, PREFIXES, SUFFIXES};

/// Leading marker of every rendered name.
pub const SIGIL: char = '~';

/// Errors produced while parsing or rendering names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("empty name")]
    Empty,
    #[error("unknown syllable '{0}'")]
    UnknownSyllable(String),
    #[error("malformed name '{0}'")]
    Malformed(String),
    #[error("name wider than 64 bits")]
    TooWide,
    #[error("invalid hex: {0}")]
    Hex(String),
}

/// Rank of a name in the hierarchy, derived from its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Galaxy,
    Star,
    Planet,
    Moon,
}

impl Tier {
    pub fn of(value: u64) -> Self {
        if value <= 0xff {
            Tier::Galaxy
        } else if value <= 0xffff {
            Tier::Star
        } else if value <= 0xffff_ffff {
            Tier::Planet
        } else {
            Tier::Moon
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Galaxy => "galaxy",
            Tier::Star => "star",
            Tier::Planet => "planet",
            Tier::Moon => "moon",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion between names and the numbers they encode.
///
/// The enumeration engine only talks to names through this trait, so tests can
/// substitute a codec that fails on chosen values.
pub trait IdentifierCodec {
    fn to_numeric(&self, identifier: &str) -> Result<u64, CodecError>;
    fn to_identifier(&self, bits: u64) -> Result<String, CodecError>;
    fn is_valid_identifier(&self, identifier: &str) -> bool;
    fn tier(&self, identifier: &str) -> Result<Tier, CodecError>;
}

/// The scrambled `@p` encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatpCodec;

impl IdentifierCodec for PatpCodec {
    fn to_numeric(&self, identifier: &str) -> Result<u64, CodecError> {
        patp_to_num(identifier)
    }

    fn to_identifier(&self, bits: u64) -> Result<String, CodecError> {
        Ok(num_to_patp(bits))
    }

    fn is_valid_identifier(&self, identifier: &str) -> bool {
        parse_syllables(identifier, false).is_ok()
    }

    fn tier(&self, identifier: &str) -> Result<Tier, CodecError> {
        patp_to_num(identifier).map(Tier::of)
    }
}

/// Render a value as `@p`.
pub fn num_to_patp(value: u64) -> String {
    render(fein(value), false)
}

/// Parse an `@p` name back to its value.
pub fn patp_to_num(name: &str) -> Result<u64, CodecError> {
    parse_syllables(name, false).map(fynd)
}

/// Render a value as `@q` (no scrambling, odd leading byte stands alone).
pub fn num_to_patq(value: u64) -> String {
    render(value, true)
}

/// Parse an `@q` name back to its value.
pub fn patq_to_num(name: &str) -> Result<u64, CodecError> {
    parse_syllables(name, true)
}

/// Lowercase hex of a value with an even digit count.
pub fn num_to_hex(value: u64) -> String {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len() - 1);
    hex::encode(&bytes[first..])
}

/// Parse hex (optionally `0x`-prefixed, odd length allowed) into a value.
pub fn hex_to_num(text: &str) -> Result<u64, CodecError> {
    let text = text.trim();
    let digits = text.strip_prefix("0x").unwrap_or(text);
    if digits.is_empty() {
        return Err(CodecError::Hex(format!("no digits in '{text}'")));
    }
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    let bytes = hex::decode(&padded).map_err(|e| CodecError::Hex(e.to_string()))?;
    if bytes.len() > 8 {
        return Err(CodecError::TooWide);
    }
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64))
}

fn render(value: u64, lone_leading_suffix: bool) -> String {
    let mut out = String::with_capacity(28);
    out.push(SIGIL);

    if value <= 0xff {
        out.push_str(SUFFIXES[value as usize]);
        return out;
    }

    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(7);
    let mut significant = &bytes[first..];

    if significant.len() % 2 == 1 {
        if lone_leading_suffix {
            out.push_str(SUFFIXES[significant[0] as usize]);
            out.push('-');
        } else {
            out.push_str(PREFIXES[0]);
            out.push_str(SUFFIXES[significant[0] as usize]);
            out.push('-');
        }
        significant = &significant[1..];
    }

    for (i, pair) in significant.chunks(2).enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push_str(PREFIXES[pair[0] as usize]);
        out.push_str(SUFFIXES[pair[1] as usize]);
    }
    out
}

/// Parse the syllables of a name into the big-endian value they spell.
///
/// Accepts a single suffix, or groups separated by `-` where every group is a
/// prefix followed by a suffix. With `lone_leading_suffix` the first of several
/// groups may also be a bare suffix, which is how `@q` writes an odd leading
/// byte.
fn parse_syllables(name: &str, lone_leading_suffix: bool) -> Result<u64, CodecError> {
    let body = name.strip_prefix(SIGIL).unwrap_or(name);
    if body.is_empty() {
        return Err(CodecError::Empty);
    }
    if !body.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
        return Err(CodecError::Malformed(name.to_string()));
    }

    let groups: Vec<&str> = body.split('-').collect();
    let mut value: u64 = 0;
    let mut width = 0usize;

    for (i, group) in groups.iter().enumerate() {
        match group.len() {
            3 if i == 0 && (groups.len() == 1 || lone_leading_suffix) => {
                let suf = suffix_index(group)
                    .ok_or_else(|| CodecError::UnknownSyllable(group.to_string()))?;
                value = suf as u64;
                width += 1;
            }
            6 => {
                let (pre, suf) = group.split_at(3);
                let hi = prefix_index(pre)
                    .ok_or_else(|| CodecError::UnknownSyllable(pre.to_string()))?;
                let lo = suffix_index(suf)
                    .ok_or_else(|| CodecError::UnknownSyllable(suf.to_string()))?;
                width += 2;
                if width > 8 {
                    return Err(CodecError::TooWide);
                }
                value = (value << 16) | ((hi as u64) << 8) | lo as u64;
            }
            _ => return Err(CodecError::Malformed(name.to_string())),
        }
    }
    Ok(value)
}
