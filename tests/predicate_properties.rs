use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use planetsieve::phonemes::{PREFIXES, SUFFIXES};
use planetsieve::strategy::{any_approx, any_english, doubles, only_approx, only_english};
use planetsieve::{split, Lexicon, Strategy, WordSet};

fn half() -> impl proptest::strategy::Strategy<Value = String> {
    (0usize..256, 0usize..256).prop_map(|(p, s)| format!("{}{}", PREFIXES[p], SUFFIXES[s]))
}

fn lexicon_from(pool: &[String], mask: &[u8]) -> Lexicon {
    let pick = |bit: u8| -> WordSet {
        pool.iter()
            .zip(mask)
            .filter(|(_, m)| *m & bit != 0)
            .map(|(w, _)| w.clone())
            .collect()
    };
    Lexicon {
        english_single: pick(1),
        english_double: pick(2),
        approx_single: pick(4),
        approx_double: pick(8),
    }
}

proptest! {
    #[test]
    fn only_english_implies_any_english_and_only_approx(
        first in half(),
        second in half(),
        pool in proptest::collection::vec(half(), 0..8),
        mask in proptest::collection::vec(0u8..16, 8),
        seed_first in 0u8..16,
        seed_second in 0u8..16,
    ) {
        // Make the halves themselves likely members of some lists.
        let mut pool = pool;
        let mut mask = mask;
        mask.truncate(pool.len());
        pool.push(first.clone());
        mask.push(seed_first);
        pool.push(second.clone());
        mask.push(seed_second);
        let lexicon = lexicon_from(&pool, &mask);

        let name = format!("~{first}-{second}");
        let pair = split(&name);
        if only_english(&pair, &lexicon) {
            prop_assert!(any_english(&pair, &lexicon));
            prop_assert!(only_approx(&pair, &lexicon));
        }
        if only_approx(&pair, &lexicon) && !lexicon.is_english(pair.first) && !lexicon.is_english(pair.second) {
            prop_assert!(any_approx(&pair, &lexicon));
        }
    }

    #[test]
    fn doubles_iff_halves_equal(first in half(), second in half()) {
        let name = format!("~{first}-{second}");
        let pair = split(&name);
        prop_assert_eq!(doubles(&pair, &Lexicon::default()), first == second);
        let twin = format!("~{first}-{first}");
        prop_assert!(Strategy::Doubles.matches(&twin, &Lexicon::default()));
    }

    #[test]
    fn empty_lexicon_only_all_and_doubles_match(first in half(), second in half()) {
        let name = format!("~{first}-{second}");
        let empty = Lexicon::default();
        prop_assert!(Strategy::All.matches(&name, &empty));
        for strategy in [Strategy::AnyApprox, Strategy::AnyEnglish, Strategy::OnlyApprox, Strategy::OnlyEnglish] {
            prop_assert!(!strategy.matches(&name, &empty));
        }
    }
}
