//! Classification strategies.
//!
//! Every strategy maps to one predicate over the two halves of a planet name.
//! "English" means either English list; "approx" means either slang list.
//! `OnlyApprox` lets each half match English or slang, so it accepts everything
//! `OnlyEnglish` accepts and more.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::syllable::{split, SyllablePair};
use crate::wordlist::Lexicon;

/// Predicate over a split name and the loaded word sets.
pub type Predicate = fn(&SyllablePair<'_>, &Lexicon) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    All,
    AnyApprox,
    AnyEnglish,
    OnlyApprox,
    OnlyEnglish,
    Doubles,
}

impl Strategy {
    /// Every strategy in prompt order.
    pub const ALL: [Strategy; 6] = [
        Strategy::All,
        Strategy::AnyApprox,
        Strategy::AnyEnglish,
        Strategy::OnlyApprox,
        Strategy::OnlyEnglish,
        Strategy::Doubles,
    ];

    /// Strategies run when none is requested.
    pub const DEFAULT_SET: [Strategy; 5] = [
        Strategy::AnyApprox,
        Strategy::OnlyApprox,
        Strategy::AnyEnglish,
        Strategy::OnlyEnglish,
        Strategy::Doubles,
    ];

    pub fn predicate(self) -> Predicate {
        match self {
            Strategy::All => all,
            Strategy::AnyApprox => any_approx,
            Strategy::AnyEnglish => any_english,
            Strategy::OnlyApprox => only_approx,
            Strategy::OnlyEnglish => only_english,
            Strategy::Doubles => doubles,
        }
    }

    /// Split `identifier` and apply this strategy's predicate.
    pub fn matches(self, identifier: &str, lexicon: &Lexicon) -> bool {
        (self.predicate())(&split(identifier), lexicon)
    }

    /// Human readable label shown in the interactive picker.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::All => "All",
            Strategy::AnyApprox => "Any English or Slang",
            Strategy::AnyEnglish => "Any English",
            Strategy::OnlyApprox => "Only English or Slang",
            Strategy::OnlyEnglish => "Only English",
            Strategy::Doubles => "Doubles",
        }
    }

    /// Stem of the output file name.
    pub fn file_stem(self) -> &'static str {
        match self {
            Strategy::All => "all",
            Strategy::AnyApprox => "any_approx",
            Strategy::AnyEnglish => "any_english",
            Strategy::OnlyApprox => "only_approx",
            Strategy::OnlyEnglish => "only_english",
            Strategy::Doubles => "doubles",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

pub fn all(_: &SyllablePair<'_>, _: &Lexicon) -> bool {
    true
}

pub fn any_approx(pair: &SyllablePair<'_>, lexicon: &Lexicon) -> bool {
    lexicon.is_approx(pair.first) || lexicon.is_approx(pair.second)
}

pub fn any_english(pair: &SyllablePair<'_>, lexicon: &Lexicon) -> bool {
    lexicon.is_english(pair.first) || lexicon.is_english(pair.second)
}

pub fn only_approx(pair: &SyllablePair<'_>, lexicon: &Lexicon) -> bool {
    let recognised = |s: &str| lexicon.is_approx(s) || lexicon.is_english(s);
    recognised(pair.first) && recognised(pair.second)
}

pub fn only_english(pair: &SyllablePair<'_>, lexicon: &Lexicon) -> bool {
    lexicon.is_english(pair.first) && lexicon.is_english(pair.second)
}

pub fn doubles(pair: &SyllablePair<'_>, _: &Lexicon) -> bool {
    pair.first == pair.second
}
