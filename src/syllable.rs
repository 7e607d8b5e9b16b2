use crate::codec::SIGIL;

/// The two hyphen-separated halves of a planet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllablePair<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

/// Split `~first-second` into its halves.
///
/// Only the first two fragments are kept; absent fragments come back empty.
/// Planet names always have exactly two.
pub fn split(identifier: &str) -> SyllablePair<'_> {
    let body = identifier.strip_prefix(SIGIL).unwrap_or(identifier);
    let mut parts = body.split('-');
    SyllablePair {
        first: parts.next().unwrap_or(""),
        second: parts.next().unwrap_or(""),
    }
}
