//! Word supply engine
//!
//! Hands out one word at a time from three priority tiers: the
//! player's own custom words, a curated "preferred" list, and a
//! generic fallback list, each partitioned by word length. Custom and
//! preferred words are exhaustion-tracked per session so nothing
//! repeats until a tier runs dry; the fallback tier repeats freely
//! and guarantees a draw can never fail.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};

use crate::rng::WordRng;

/// Shortest playable word
pub const MIN_WORD_LEN: usize = 3;
/// Longest playable word
pub const MAX_WORD_LEN: usize = 9;
/// Cap on player-supplied custom words, across all lengths
pub const MAX_CUSTOM_WORDS: usize = 100;
/// Returned when even the fallback list for a length is empty
pub const FALLBACK_WORD: &str = "HELLO";
/// Reshuffle attempts before accepting a scramble equal to the input
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 10;

/// Curated words surfaced after custom words, before the generic list.
/// Every entry has exactly the length of its table; a length may have
/// no preferred words at all (length 3 has none).
fn preferred_words(len: usize) -> &'static [&'static str] {
    match len {
        4 => &["VIEW", "LOSE"],
        5 => &["MOIST", "LOYAL", "AVOID", "HAUNT", "ROYAL", "OUNCE", "FLUTE"],
        6 => &[
            "SPRAWL", "LAUNCH", "SAUCER", "POUNCE", "POISON", "AUGUST", "COWARD", "EMPLOY",
            "CRUISE", "AVENUE", "CHOOSE", "BRUISE",
        ],
        7 => &["DESTROY", "AUCTION", "AWKWARD", "AWESOME", "CARTOON", "NAUGHTY"],
        8 => &["COMPUTER", "BARBEQUE", "SOUVENIR"],
        9 => &["ENCOUNTER", "AVOIDABLE", "AUTOGRAPH"],
        _ => &[],
    }
}

/// Generic word list, used once custom and preferred tiers are
/// exhausted. Repeats are allowed here.
fn fallback_words(len: usize) -> &'static [&'static str] {
    match len {
        3 => &[
            "CAT", "DOG", "BAT", "RAT", "PIG", "COW", "FOX", "HEN", "OWL", "BAG", "HAT", "CUP",
            "BED", "CAR", "KEY", "MAP", "BOX", "JAR", "CAN", "RUN", "SIT", "EAT", "DRY", "WET",
            "RED", "HOT", "NEW", "THE", "AND", "FOR", "BUT", "NOT", "ALL", "ANY", "ONE", "TWO",
            "SIX", "SKY", "SEA", "SUN",
        ],
        4 => &[
            "BIRD", "FISH", "DEER", "BEAR", "WOLF", "LION", "DUCK", "CAKE", "MILK", "MEAT",
            "BOOK", "TREE", "DOOR", "JUMP", "PLAY", "WORK", "READ", "SING", "BLUE", "GOLD",
            "HOME", "LIFE", "FIRE", "WIND", "MOON", "STAR", "COLD", "GRAY", "SNOW", "RAIN",
            "LAMP", "SHIP", "ROAD", "SAND", "LEAF",
        ],
        5 => &[
            "HORSE", "SNAKE", "TIGER", "PANDA", "KOALA", "ZEBRA", "LLAMA", "SHARK", "WHALE",
            "EAGLE", "APPLE", "BREAD", "PIZZA", "SALAD", "WATER", "DANCE", "PAINT", "STUDY",
            "LEARN", "TEACH", "BUILD", "HOUSE", "WORLD", "PEACE", "HAPPY", "BRAVE", "SMART",
            "QUICK", "GREEN", "BLACK", "CHAIR", "CLOUD", "RIVER", "STONE", "MUSIC",
        ],
        6 => &[
            "MONKEY", "PARROT", "FALCON", "RABBIT", "DONKEY", "TURTLE", "BANANA", "ORANGE",
            "GRAPES", "CARROT", "TOMATO", "BUTTER", "CAMERA", "GUITAR", "CANDLE", "MIRROR",
            "BASKET", "GARDEN", "BRIDGE", "CASTLE", "FOREST", "DESERT", "JUNGLE", "WINDOW",
            "SCHOOL", "PLANET", "ROCKET", "SILVER", "PURPLE", "YELLOW", "SPRING", "WINTER",
            "SUMMER", "PENCIL",
        ],
        7 => &[
            "DOLPHIN", "PENGUIN", "OSTRICH", "PEACOCK", "GIRAFFE", "CHICKEN", "HAMSTER",
            "AVOCADO", "COCONUT", "CABBAGE", "PUMPKIN", "PRINTER", "SCANNER", "SPEAKER",
            "VOLCANO", "GLACIER", "SAVANNA", "THEATER", "LIBRARY", "MACHINE", "KITCHEN",
            "BEDROOM", "CEILING", "DRAWING", "MORNING", "EVENING", "HOLIDAY", "JOURNEY",
            "MYSTERY", "RAINBOW", "THUNDER", "WEATHER", "DIAMOND",
        ],
        8 => &[
            "ELEPHANT", "KANGAROO", "FLAMINGO", "SQUIRREL", "REINDEER", "COMPUTER", "KEYBOARD",
            "NOTEBOOK", "SANDWICH", "MOUNTAIN", "HOSPITAL", "AIRPLANE", "BIRTHDAY", "BUILDING",
            "CALENDAR", "DINOSAUR", "ENVELOPE", "FESTIVAL", "LAVENDER", "MEDICINE", "PAINTING",
            "SCISSORS", "SHOULDER", "SUNSHINE", "TREASURE", "UMBRELLA", "VACATION",
        ],
        9 => &[
            "CROCODILE", "BUTTERFLY", "TELEPHONE", "WATERFALL", "PINEAPPLE", "CHOCOLATE",
            "HAMBURGER", "VEGETABLE", "ADVENTURE", "BREAKFAST", "AFTERNOON", "APARTMENT",
            "ASTRONAUT", "BLACKBIRD", "CLASSROOM", "COMMUNITY", "DANGEROUS", "DIRECTION",
            "EDUCATION", "FIREWORKS", "FURNITURE", "GYMNASIUM", "HAPPINESS", "IMPORTANT",
            "INVENTION", "LIGHTNING", "ORCHESTRA", "SCARECROW", "SEPTEMBER", "SUBMARINE",
            "TELESCOPE", "WONDERFUL", "XYLOPHONE",
        ],
        _ => &[],
    }
}

/// Externally persisted slot holding the player's custom word list,
/// newline-delimited. The supply engine re-reads it on every draw so
/// edits between rounds take effect immediately.
pub trait WordStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
    fn clear(&mut self);
}

/// Check if a word length is playable (3-9 letters)
pub fn is_valid_word_length(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
}

/// All lengths the supply engine serves
pub fn available_word_lengths() -> Vec<usize> {
    (MIN_WORD_LEN..=MAX_WORD_LEN).collect()
}

/// Normalize a raw newline-delimited custom word list: trim,
/// uppercase, keep A-Z words of playable length, cap at
/// [`MAX_CUSTOM_WORDS`].
pub fn parse_custom_words(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            line.trim()
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .collect::<String>()
        })
        .filter(|word| {
            is_valid_word_length(word) && word.chars().all(|c| c.is_ascii_uppercase())
        })
        .take(MAX_CUSTOM_WORDS)
        .collect()
}

fn read_custom_words(store: &dyn WordStore) -> Vec<String> {
    store
        .get()
        .map(|raw| parse_custom_words(&raw))
        .unwrap_or_default()
}

/// Per-session exhaustion tracking: which custom and preferred words
/// have already been drawn. Custom words are tracked across all
/// lengths, preferred words per length. Cleared only at explicit
/// new-game boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct UsageLedger {
    used_custom: BTreeSet<String>,
    used_preferred: BTreeMap<u32, BTreeSet<String>>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.used_custom.clear();
        self.used_preferred.clear();
    }

    pub fn is_custom_used(&self, word: &str) -> bool {
        self.used_custom.contains(word)
    }

    fn mark_custom(&mut self, word: &str) {
        self.used_custom.insert(word.to_string());
    }

    fn mark_preferred(&mut self, len: usize, word: &str) {
        self.used_preferred
            .entry(len as u32)
            .or_default()
            .insert(word.to_string());
    }

    /// Preferred words of the given length not yet drawn this session
    fn preferred_remaining(&self, len: usize) -> Vec<&'static str> {
        let used = self.used_preferred.get(&(len as u32));
        preferred_words(len)
            .iter()
            .filter(|word| used.map_or(true, |set| !set.contains(**word)))
            .copied()
            .collect()
    }
}

/// The word supply engine: owns the session's [`UsageLedger`] and
/// draws words under the custom > preferred > fallback priority
/// policy. Session-scoped by construction; two sessions never share
/// exhaustion state.
#[derive(Debug, Clone, Default, Encode, Decode)]
pub struct WordSupply {
    ledger: UsageLedger,
}

impl WordSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear exhaustion tracking. Called at explicit new-game starts,
    /// never between words.
    pub fn reset_ledger(&mut self) {
        self.ledger.clear();
    }

    pub fn ledger(&self) -> &UsageLedger {
        &self.ledger
    }

    /// Draw one word of any length.
    ///
    /// Priority: unused custom words (any length), then a uniformly
    /// chosen length that still has unused preferred words, then a
    /// uniformly chosen length from the fallback tier. Never fails.
    pub fn draw_word<R: WordRng>(&mut self, store: &dyn WordStore, rng: &mut R) -> String {
        let custom = read_custom_words(store);
        let unused_custom: Vec<String> = custom
            .iter()
            .filter(|word| !self.ledger.is_custom_used(word))
            .cloned()
            .collect();
        if let Some(word) = rng.choose(&unused_custom) {
            self.ledger.mark_custom(&word);
            return word;
        }

        let lengths_with_preferred: Vec<usize> = available_word_lengths()
            .into_iter()
            .filter(|len| !self.ledger.preferred_remaining(*len).is_empty())
            .collect();
        if let Some(len) = rng.choose(&lengths_with_preferred) {
            return self.draw_word_of_length(len, store, rng);
        }

        let len = rng
            .choose(&available_word_lengths())
            .unwrap_or(MIN_WORD_LEN);
        self.draw_word_of_length(len, store, rng)
    }

    /// Draw one word of exactly `len` letters.
    ///
    /// Same tier priority as [`draw_word`](Self::draw_word), filtered
    /// to the requested length. Falls back to [`FALLBACK_WORD`] if
    /// even the fallback list for this length is empty.
    pub fn draw_word_of_length<R: WordRng>(
        &mut self,
        len: usize,
        store: &dyn WordStore,
        rng: &mut R,
    ) -> String {
        let custom = read_custom_words(store);
        let unused_custom: Vec<String> = custom
            .iter()
            .filter(|word| word.len() == len && !self.ledger.is_custom_used(word))
            .cloned()
            .collect();
        if let Some(word) = rng.choose(&unused_custom) {
            self.ledger.mark_custom(&word);
            return word;
        }

        let unused_preferred = self.ledger.preferred_remaining(len);
        if let Some(word) = rng.choose(&unused_preferred) {
            self.ledger.mark_preferred(len, word);
            return word.to_string();
        }

        match rng.choose(fallback_words(len)) {
            Some(word) => word.to_string(),
            None => FALLBACK_WORD.to_string(),
        }
    }
}

/// Scramble a word's letters into a different order.
///
/// Reshuffles up to [`MAX_SCRAMBLE_ATTEMPTS`] times looking for an
/// order that differs from the input; words whose letters admit no
/// differing permutation (all-identical letters) come back unchanged.
pub fn scramble<R: WordRng>(word: &str, rng: &mut R) -> String {
    let original: Vec<char> = word.chars().collect();
    if original.len() <= 1 {
        return word.to_string();
    }

    let mut scrambled = original.clone();
    let mut attempts = 0;
    while scrambled == original && attempts < MAX_SCRAMBLE_ATTEMPTS {
        let mut letters = original.clone();
        rng.shuffle(&mut letters);
        scrambled = letters;
        attempts += 1;
    }
    scrambled.into_iter().collect()
}

/// Words available at a given length, across all three tiers
pub fn word_count_for_length(len: usize, store: &dyn WordStore) -> usize {
    let custom = read_custom_words(store)
        .iter()
        .filter(|word| word.len() == len)
        .count();
    custom + preferred_words(len).len() + fallback_words(len).len()
}

/// Total words available across all lengths and tiers
pub fn total_word_count(store: &dyn WordStore) -> usize {
    let custom = read_custom_words(store).len();
    let built_in: usize = available_word_lengths()
        .into_iter()
        .map(|len| preferred_words(len).len() + fallback_words(len).len())
        .sum();
    custom + built_in
}
