use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{empty_store, rng, store_with};
use crate::words::*;

/// All preferred words across lengths 3-9, for exhaustion checks
fn all_preferred() -> BTreeSet<String> {
    let mut supply = WordSupply::new();
    let store = empty_store();
    let mut r = rng(1);
    // Drain preferred draws until a repeat shows up
    let mut seen = BTreeSet::new();
    for _ in 0..200 {
        let word = supply.draw_word(&store, &mut r);
        if !seen.insert(word) {
            break;
        }
    }
    seen
}

#[test]
fn test_draw_word_of_length_returns_requested_length() {
    let mut supply = WordSupply::new();
    let store = empty_store();
    let mut r = rng(42);

    for len in MIN_WORD_LEN..=MAX_WORD_LEN {
        for _ in 0..50 {
            let word = supply.draw_word_of_length(len, &store, &mut r);
            assert_eq!(
                word.len(),
                len,
                "Draw of length {} returned {:?}",
                len,
                word
            );
        }
    }
}

#[test]
fn test_draw_word_always_playable_length() {
    let mut supply = WordSupply::new();
    let store = empty_store();
    let mut r = rng(7);

    for _ in 0..200 {
        let word = supply.draw_word(&store, &mut r);
        assert!(
            is_valid_word_length(&word),
            "Drawn word {:?} outside 3-9",
            word
        );
    }
}

#[test]
fn test_scramble_is_permutation() {
    let mut r = rng(3);

    for word in ["CAT", "LISTEN", "ENCOUNTER"] {
        let scrambled = scramble(word, &mut r);
        let mut expected: Vec<char> = word.chars().collect();
        let mut actual: Vec<char> = scrambled.chars().collect();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual, "Scramble of {:?} lost letters", word);
    }
}

#[test]
fn test_scramble_differs_when_possible() {
    // Any word with two distinct letters admits a differing
    // permutation; ten attempts make a same-order result vanishingly
    // unlikely, and the implementation retries until it differs.
    for seed in 0..50 {
        let mut r = rng(seed);
        let scrambled = scramble("POUNCE", &mut r);
        assert_ne!(scrambled, "POUNCE", "Seed {} left word unscrambled", seed);
    }
}

#[test]
fn test_scramble_identical_letters_unchanged() {
    let mut r = rng(9);
    assert_eq!(scramble("AAA", &mut r), "AAA");
    assert_eq!(scramble("A", &mut r), "A");
    assert_eq!(scramble("", &mut r), "");
}

#[test]
fn test_custom_tier_no_repeat_until_exhausted() {
    let mut supply = WordSupply::new();
    let store = store_with(&["CAT", "DOG", "BIRD", "HORSE"]);
    let mut r = rng(11);

    let mut drawn = BTreeSet::new();
    for _ in 0..4 {
        let word = supply.draw_word(&store, &mut r);
        assert!(drawn.insert(word.clone()), "Repeated {:?} early", word);
    }
    let expected: BTreeSet<String> = ["CAT", "DOG", "BIRD", "HORSE"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(drawn, expected, "Custom tier not fully drawn first");

    // Fifth draw must leave the exhausted custom tier
    let fifth = supply.draw_word(&store, &mut r);
    assert!(!expected.contains(&fifth), "Custom word redrawn: {:?}", fifth);
}

#[test]
fn test_preferred_tier_no_repeat_until_exhausted_per_length() {
    let mut supply = WordSupply::new();
    let store = empty_store();
    let mut r = rng(23);

    // Length 4 has exactly two preferred words
    let first = supply.draw_word_of_length(4, &store, &mut r);
    let second = supply.draw_word_of_length(4, &store, &mut r);
    let mut pair = [first.as_str(), second.as_str()];
    pair.sort();
    assert_eq!(pair, ["LOSE", "VIEW"], "Preferred pair not drawn first");

    // Once exhausted, draws fall to the fallback tier
    for _ in 0..20 {
        let word = supply.draw_word_of_length(4, &store, &mut r);
        assert_ne!(word, "VIEW");
        assert_ne!(word, "LOSE");
    }
}

#[test]
fn test_draw_word_exhausts_preferred_before_repeating() {
    let seen = all_preferred();
    // 2 + 7 + 12 + 6 + 3 + 3 preferred words across lengths 4-9
    assert!(
        seen.len() >= 33,
        "Repeat appeared after only {} distinct draws",
        seen.len()
    );
}

#[test]
fn test_reset_ledger_restores_eligibility() {
    let mut supply = WordSupply::new();
    let store = empty_store();
    let mut r = rng(31);

    supply.draw_word_of_length(4, &store, &mut r);
    supply.draw_word_of_length(4, &store, &mut r);

    supply.reset_ledger();
    let word = supply.draw_word_of_length(4, &store, &mut r);
    assert!(
        word == "VIEW" || word == "LOSE",
        "Preferred tier not eligible after reset, got {:?}",
        word
    );
}

#[test]
fn test_session_scenario_custom_then_fallthrough() {
    let mut supply = WordSupply::new();
    let store = store_with(&["CAT", "DOG"]);
    let mut r = rng(5);

    let first = supply.draw_word_of_length(3, &store, &mut r);
    let second = supply.draw_word_of_length(3, &store, &mut r);
    let mut pair = [first.as_str(), second.as_str()];
    pair.sort();
    assert_eq!(pair, ["CAT", "DOG"]);

    // No length-3 preferred words exist, so the third draw comes from
    // the fallback list
    let third = supply.draw_word_of_length(3, &store, &mut r);
    assert_eq!(third.len(), 3);
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[test]
fn test_draw_marks_used_exactly_once() {
    let mut supply = WordSupply::new();
    let store = store_with(&["CAT", "DOG"]);
    let mut r = rng(13);

    let word = supply.draw_word(&store, &mut r);
    let other = if word == "CAT" { "DOG" } else { "CAT" };
    assert!(supply.ledger().is_custom_used(&word));
    assert!(
        !supply.ledger().is_custom_used(other),
        "Draw marked a word it did not return"
    );
}

#[test]
fn test_custom_store_reread_each_draw() {
    let mut supply = WordSupply::new();
    let mut store = empty_store();
    let mut r = rng(17);

    let before = supply.draw_word_of_length(3, &store, &mut r);
    assert_ne!(before, "ZAP", "Unsaved custom word drawn");

    // Saving between draws takes effect on the very next draw
    store.value = Some("ZAP".to_string());
    let after = supply.draw_word_of_length(3, &store, &mut r);
    assert_eq!(after, "ZAP");
}

#[test]
fn test_parse_custom_words_normalizes() {
    let parsed = parse_custom_words("  cat \nDoG\nx\nhippopotamus\nBIRD2\n\nzebra");
    assert_eq!(parsed, ["CAT", "DOG", "ZEBRA"]);
}

#[test]
fn test_parse_custom_words_caps_at_limit() {
    let mut raw = String::new();
    for i in 0..150 {
        // AAA, AAB, ... distinct three-letter words
        let c = (b'A' + (i % 26) as u8) as char;
        let d = (b'A' + (i / 26) as u8) as char;
        raw.push('A');
        raw.push(d);
        raw.push(c);
        raw.push('\n');
    }
    assert_eq!(parse_custom_words(&raw).len(), MAX_CUSTOM_WORDS);
}

#[test]
fn test_word_counts_include_all_tiers() {
    let store = store_with(&["CAT", "HORSE"]);
    // Length 3: one custom word, no preferred, 40 fallback entries
    assert_eq!(word_count_for_length(3, &store), 41);
    let empty = empty_store();
    assert_eq!(
        total_word_count(&store),
        total_word_count(&empty) + 2,
        "Custom words missing from the total"
    );
}
