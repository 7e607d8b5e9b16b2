//! Walks every planet under a star and keeps those a strategy accepts.
//!
//! A planet's number is its 16-bit offset placed above the star's 16 bits, so
//! offset `0x0001` under `~marzod` (`0x0100`) is `0x0001_0100`. Offsets are
//! visited in increasing order, `1..=0xffff`; offset zero would be the star
//! itself.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::codec::{CodecError, IdentifierCodec};
use crate::sorter::{finalize, ResultSet};
use crate::strategy::Strategy;
use crate::syllable::split;
use crate::validate::Parent;
use crate::wordlist::Lexicon;
use crate::SieveError;

pub const FIRST_OFFSET: u32 = 1;
pub const LAST_OFFSET: u32 = 0xffff;
/// Width of the parent part of a child's number.
pub const PARENT_BITS: u32 = 16;

/// An offset whose name could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
    pub offset: u32,
    pub reason: String,
}

/// Outcome of one walk for one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct Enumeration {
    pub strategy: Strategy,
    pub matches: ResultSet,
    pub skipped: Vec<Skip>,
    /// Offsets that produced a name and went through the predicate.
    pub evaluated: u32,
}

/// Number of the child at `offset` under a parent with number `base`.
pub fn child_bits(base: u64, offset: u32) -> u64 {
    ((offset as u64) << PARENT_BITS) | base
}

/// Name of the child at `offset`.
pub fn derive_child<C: IdentifierCodec>(
    codec: &C,
    base: u64,
    offset: u32,
) -> Result<String, CodecError> {
    codec.to_identifier(child_bits(base, offset))
}

pub struct Engine<'a, C: IdentifierCodec> {
    codec: &'a C,
    lexicon: &'a Lexicon,
}

impl<'a, C: IdentifierCodec> Engine<'a, C> {
    pub fn new(codec: &'a C, lexicon: &'a Lexicon) -> Self {
        Self { codec, lexicon }
    }

    /// Classify every child of `parent` with `strategy`.
    ///
    /// Fails only if the parent itself cannot be decoded. Children that cannot
    /// be rendered are recorded in [`Enumeration::skipped`].
    pub fn enumerate(&self, parent: &Parent, strategy: Strategy) -> Result<Enumeration, SieveError> {
        let base = self.codec.to_numeric(parent.as_str())?;
        let predicate = strategy.predicate();
        debug!(%parent, base, %strategy, "enumerating children");

        let mut matches = Vec::new();
        let mut skipped = Vec::new();
        let mut evaluated = 0u32;

        for offset in FIRST_OFFSET..=LAST_OFFSET {
            let child = match derive_child(self.codec, base, offset) {
                Ok(child) => child,
                Err(e) => {
                    skipped.push(Skip {
                        offset,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            evaluated += 1;
            if predicate(&split(&child), self.lexicon) {
                matches.push(child);
            }
        }

        if !skipped.is_empty() {
            warn!(%parent, %strategy, skipped = skipped.len(), "some children could not be named");
        }
        let matches = finalize(matches);
        info!(%parent, %strategy, matched = matches.len(), evaluated, "strategy complete");

        Ok(Enumeration {
            strategy,
            matches,
            skipped,
            evaluated,
        })
    }

    /// Run each strategy in turn, walking the whole space once per strategy.
    pub fn enumerate_all(
        &self,
        parent: &Parent,
        strategies: &[Strategy],
    ) -> Result<Vec<Enumeration>, SieveError> {
        strategies
            .iter()
            .map(|&strategy| self.enumerate(parent, strategy))
            .collect()
    }
}
