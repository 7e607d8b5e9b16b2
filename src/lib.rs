//! Core logic for sieving the planets of an Urbit star.
//!
//! Every star parents 65535 planets. This crate names each of them, splits
//! the name into its two halves and keeps the ones a [`Strategy`] accepts
//! against a set of word lists, producing one sorted list per strategy.

pub mod cli_error;
pub mod codec;
pub mod config;
pub mod enumerate;
mod error;
pub mod ob;
pub mod output;
pub mod phonemes;
pub mod sorter;
pub mod stats;
pub mod strategy;
pub mod syllable;
pub mod validate;
pub mod wordlist;

pub use codec::{
    hex_to_num, num_to_hex, num_to_patp, num_to_patq, patp_to_num, patq_to_num, CodecError,
    IdentifierCodec, PatpCodec, Tier,
};
pub use config::Config;
pub use enumerate::{child_bits, derive_child, Engine, Enumeration, Skip};
pub use error::SieveError;
pub use output::{result_path, write_results};
pub use sorter::{finalize, ResultSet};
pub use stats::RunStats;
pub use strategy::Strategy;
pub use syllable::{split, SyllablePair};
pub use validate::{validate_parent, Parent};
pub use wordlist::{Lexicon, WordListPaths, WordSet};
