use std::collections::HashSet;

use planetsieve::sorter::is_ordered;
use planetsieve::{
    child_bits, split, validate_parent, CodecError, Engine, IdentifierCodec, Lexicon, PatpCodec,
    Strategy, Tier, WordSet,
};

fn marzod() -> planetsieve::Parent {
    validate_parent(&PatpCodec, "~marzod").unwrap()
}

#[test]
fn all_yields_every_child_once() {
    let lexicon = Lexicon::default();
    let engine = Engine::new(&PatpCodec, &lexicon);
    let run = engine.enumerate(&marzod(), Strategy::All).unwrap();

    assert!(run.skipped.is_empty());
    assert_eq!(run.evaluated, 65535);
    assert_eq!(run.matches.len(), 65535);
    assert!(is_ordered(run.matches.as_slice()));

    let mut offsets = HashSet::new();
    for name in &run.matches {
        let value = PatpCodec.to_numeric(name).unwrap();
        assert_eq!(value & 0xffff, 0x0100, "{name}");
        let offset = value >> 16;
        assert!((1..=0xffff).contains(&offset));
        assert!(offsets.insert(offset), "duplicate offset for {name}");
    }
    assert_eq!(offsets.len(), 65535);
}

#[test]
fn any_english_finds_doznec() {
    let lexicon = Lexicon {
        english_single: WordSet::from_lines("doznec\n"),
        ..Default::default()
    };
    let engine = Engine::new(&PatpCodec, &lexicon);
    let run = engine.enumerate(&marzod(), Strategy::AnyEnglish).unwrap();

    assert_eq!(run.matches.as_slice(), ["~doznec-botryp".to_string()]);
    for name in &run.matches {
        let pair = split(name);
        assert!(pair.first == "doznec" || pair.second == "doznec");
    }
}

#[test]
fn empty_english_set_matches_nothing() {
    let lexicon = Lexicon {
        approx_single: WordSet::from_lines("doznec\nbotryp\n"),
        ..Default::default()
    };
    let engine = Engine::new(&PatpCodec, &lexicon);
    for star in ["~marzod", "~binzod", "~fipfes"] {
        let parent = validate_parent(&PatpCodec, star).unwrap();
        let run = engine.enumerate(&parent, Strategy::OnlyEnglish).unwrap();
        assert!(run.matches.is_empty(), "{star}");
    }
}

#[test]
fn doubles_ignore_word_lists() {
    let empty = Lexicon::default();
    let full = Lexicon {
        english_single: WordSet::from_lines("bospem\n"),
        approx_double: WordSet::from_lines("wicdev\n"),
        ..Default::default()
    };
    let a = Engine::new(&PatpCodec, &empty)
        .enumerate(&marzod(), Strategy::Doubles)
        .unwrap();
    let b = Engine::new(&PatpCodec, &full)
        .enumerate(&marzod(), Strategy::Doubles)
        .unwrap();
    assert_eq!(a.matches, b.matches);
    assert_eq!(a.matches.as_slice(), ["~bospem-bospem".to_string()]);
}

#[test]
fn repeated_runs_are_identical() {
    let lexicon = Lexicon {
        english_single: WordSet::from_lines("wicdev\nbospem\npanret\n"),
        approx_single: WordSet::from_lines("tocsel\n"),
        ..Default::default()
    };
    let engine = Engine::new(&PatpCodec, &lexicon);
    let first = engine.enumerate(&marzod(), Strategy::AnyApprox).unwrap();
    let second = engine.enumerate(&marzod(), Strategy::AnyApprox).unwrap();
    assert!(!first.matches.is_empty());
    assert_eq!(first.matches, second.matches);
}

#[test]
fn enumerate_all_runs_in_order() {
    let lexicon = Lexicon::default();
    let engine = Engine::new(&PatpCodec, &lexicon);
    let runs = engine
        .enumerate_all(&marzod(), &[Strategy::Doubles, Strategy::AnyEnglish])
        .unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].strategy, Strategy::Doubles);
    assert_eq!(runs[1].strategy, Strategy::AnyEnglish);
    assert!(runs[1].matches.is_empty());
}

/// Delegates to `@p` but refuses to name every hundredth child. The parent
/// itself (offset zero) still renders so it can be validated.
struct Flaky;

impl IdentifierCodec for Flaky {
    fn to_numeric(&self, identifier: &str) -> Result<u64, CodecError> {
        PatpCodec.to_numeric(identifier)
    }

    fn to_identifier(&self, bits: u64) -> Result<String, CodecError> {
        let offset = bits >> 16;
        if offset != 0 && offset % 100 == 0 {
            Err(CodecError::Malformed(format!("{bits:#x}")))
        } else {
            PatpCodec.to_identifier(bits)
        }
    }

    fn is_valid_identifier(&self, identifier: &str) -> bool {
        PatpCodec.is_valid_identifier(identifier)
    }

    fn tier(&self, identifier: &str) -> Result<Tier, CodecError> {
        PatpCodec.tier(identifier)
    }
}

#[test]
fn decode_failures_are_skipped_not_fatal() {
    let lexicon = Lexicon::default();
    let parent = validate_parent(&Flaky, "~marzod").unwrap();
    let run = Engine::new(&Flaky, &lexicon)
        .enumerate(&parent, Strategy::All)
        .unwrap();

    let expected_skips = (1..=0xffffu32).filter(|o| o % 100 == 0).count();
    assert_eq!(run.skipped.len(), expected_skips);
    assert_eq!(run.matches.len() + run.skipped.len(), 65535);
    assert_eq!(run.evaluated as usize, run.matches.len());
    assert_eq!(run.skipped[0].offset, 100);
    assert!(run.skipped[0].reason.contains(&format!("{:#x}", child_bits(0x0100, 100))));
    assert!(run.skipped.windows(2).all(|w| w[0].offset < w[1].offset));
    let refused = PatpCodec.to_identifier(child_bits(0x0100, 100)).unwrap();
    assert!(!run.matches.as_slice().contains(&refused));
    let kept = PatpCodec.to_identifier(child_bits(0x0100, 101)).unwrap();
    assert!(run.matches.as_slice().contains(&kept));
}
