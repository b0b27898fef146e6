//! Round state machine
//!
//! Drives one play session: current word, scrambled rendering, input
//! buffer, countdown timer, score, and the periodic letter-reveal
//! penalty. All inputs are sanitized locally; no operation here can
//! fail.

use alloc::string::String;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::log;
use crate::rng::WordRng;
use crate::words::{scramble, WordStore, WordSupply};

/// Seconds on the clock for each word
pub const ROUND_SECONDS: u32 = 45;
/// Seconds between automatic letter reveals
pub const REVEAL_INTERVAL_SECONDS: u32 = 10;
/// Points deducted per auto-revealed letter
pub const REVEAL_PENALTY: u32 = 5;

/// Current status of the round
///
/// `Paused` is declared for completeness but no transition reaches
/// it; gameplay only moves between `Playing` and `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// What a call to [`RoundState::apply_input`] did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputOutcome {
    /// Buffer shorter than the target word; keep typing
    Incomplete,
    /// Buffer filled the word length but did not match
    Wrong,
    /// Word solved; points were added and a new word drawn
    Solved { points: u32 },
    /// Round is not in the playing state; input ignored
    Ignored,
}

/// One active game round
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    /// Word the player must type (uppercase, 3-9 letters)
    pub current_word: String,
    /// Permutation of `current_word` shown to the player
    pub scrambled_word: String,
    /// Letters typed so far (uppercase A-Z, at most word length)
    pub user_input: String,
    /// Seconds remaining, counts down from [`ROUND_SECONDS`]
    pub time_left: u32,
    /// Accumulated score; reveal penalties clamp at 0
    pub score: u32,
    /// Letters auto-revealed so far for the current word
    pub revealed_letters: u32,
    /// Playing or game over
    pub status: GameStatus,
}

impl RoundState {
    /// Start a fresh round: draw and scramble a word, zero the score,
    /// reset the clock. Does NOT touch the supply's usage ledger;
    /// that reset belongs to explicit new-game boundaries only.
    pub fn start<R: WordRng>(supply: &mut WordSupply, store: &dyn WordStore, rng: &mut R) -> Self {
        let word = supply.draw_word(store, rng);
        let scrambled = scramble(&word, rng);
        log::action("round_start", &word);
        Self {
            current_word: word,
            scrambled_word: scrambled,
            user_input: String::new(),
            time_left: ROUND_SECONDS,
            score: 0,
            revealed_letters: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Countdown tick, once per second while playing.
    ///
    /// A tick at 1 second transitions straight to game over; the
    /// clock never displays 0 while still playing.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        if self.time_left <= 1 {
            self.status = GameStatus::GameOver;
            log::action("game_over", &self.current_word);
        } else {
            self.time_left -= 1;
        }
    }

    /// Reveal tick, once per [`REVEAL_INTERVAL_SECONDS`] while
    /// playing: reveal the next letter and deduct [`REVEAL_PENALTY`]
    /// points, clamped at zero. A no-op once the whole word is
    /// revealed.
    pub fn reveal_tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        if self.revealed_letters < self.current_word.len() as u32 {
            self.revealed_letters += 1;
            self.score = self.score.saturating_sub(REVEAL_PENALTY);
        }
    }

    /// Replace the input buffer with a sanitized copy of `raw` and
    /// auto-check once the buffer fills the word length.
    ///
    /// On a match the score grows by `time_left * word_length`, the
    /// buffer and reveal count reset, a new word is drawn from the
    /// supply (ledger untouched), and the clock resets to
    /// [`ROUND_SECONDS`].
    pub fn apply_input<R: WordRng>(
        &mut self,
        raw: &str,
        supply: &mut WordSupply,
        store: &dyn WordStore,
        rng: &mut R,
    ) -> InputOutcome {
        if !self.is_playing() {
            return InputOutcome::Ignored;
        }

        let sanitized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .take(self.current_word.len())
            .collect();
        self.user_input = sanitized;

        if self.user_input.len() < self.current_word.len() {
            return InputOutcome::Incomplete;
        }
        if self.user_input != self.current_word {
            return InputOutcome::Wrong;
        }

        // Points reward both speed and word length
        let points = self.time_left * self.current_word.len() as u32;
        self.score += points;
        self.user_input.clear();
        self.revealed_letters = 0;

        let word = supply.draw_word(store, rng);
        self.scrambled_word = scramble(&word, rng);
        self.current_word = word;
        self.time_left = ROUND_SECONDS;
        log::action("word_solved", &self.current_word);

        InputOutcome::Solved { points }
    }
}
