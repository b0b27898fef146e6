//! View types for UI serialization
//!
//! This module provides view structs for sending game state to
//! frontends. The view never exposes the answer while a round is
//! live; the UI only sees the scrambled letters and the per-cell
//! progress states it renders.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::claim::ClaimState;
use crate::round::{
    GameStatus, RoundState, REVEAL_INTERVAL_SECONDS, REVEAL_PENALTY, ROUND_SECONDS,
};

/// One progress box under the input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LetterCell {
    /// Typed letter matching the target at this position
    Correct { letter: char },
    /// Typed letter that does not match
    Incorrect { letter: char },
    /// Auto-revealed letter the player has not typed over yet
    Revealed { letter: char },
    /// Nothing typed or revealed here
    Empty,
}

/// The complete game view sent to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    /// Scrambled word, one letter per display box
    pub scrambled_letters: Vec<char>,
    /// Per-position progress boxes for the target word
    pub progress: Vec<LetterCell>,
    /// Current input buffer
    pub user_input: String,
    pub score: u32,
    pub time_left: u32,
    /// "playing" | "paused" | "gameOver"
    pub status: String,
    pub word_length: u32,
    pub revealed_letters: u32,
    /// Rules copy renders from these so displayed cadence cannot
    /// drift from the implemented one
    pub round_seconds: u32,
    pub reveal_interval_seconds: u32,
    pub reveal_penalty: u32,
    /// The answer, exposed only once the round is over
    pub answer: Option<String>,
    /// Whether the claim flow may be started
    pub can_claim: bool,
    pub claim: ClaimState,
}

impl GameView {
    /// Construct a view from the round and claim state
    pub fn from_state(round: &RoundState, claim: &ClaimState) -> Self {
        let word: Vec<char> = round.current_word.chars().collect();
        let input: Vec<char> = round.user_input.chars().collect();
        let revealed = round.revealed_letters as usize;

        let progress: Vec<LetterCell> = word
            .iter()
            .enumerate()
            .map(|(i, &target)| {
                if let Some(&typed) = input.get(i) {
                    if typed == target {
                        LetterCell::Correct { letter: typed }
                    } else {
                        LetterCell::Incorrect { letter: typed }
                    }
                } else if i < revealed {
                    LetterCell::Revealed { letter: target }
                } else {
                    LetterCell::Empty
                }
            })
            .collect();

        let game_over = round.status == GameStatus::GameOver;

        Self {
            scrambled_letters: round.scrambled_word.chars().collect(),
            progress,
            user_input: round.user_input.clone(),
            score: round.score,
            time_left: round.time_left,
            status: match round.status {
                GameStatus::Playing => String::from("playing"),
                GameStatus::Paused => String::from("paused"),
                GameStatus::GameOver => String::from("gameOver"),
            },
            word_length: word.len() as u32,
            revealed_letters: round.revealed_letters,
            round_seconds: ROUND_SECONDS,
            reveal_interval_seconds: REVEAL_INTERVAL_SECONDS,
            reveal_penalty: REVEAL_PENALTY,
            answer: game_over.then(|| round.current_word.clone()),
            can_claim: game_over && round.score > 0,
            claim: claim.clone(),
        }
    }
}
