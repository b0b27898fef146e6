//! Speed Scrabbler core
//!
//! Word supply engine, round state machine, and claim flow for the
//! browser word-unscrambling game. The crate is `no_std + alloc`
//! compatible so the same logic runs in wasm and native hosts; the
//! default `std` feature enables facade logging and serde std impls.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod claim;
pub mod log;
pub mod mint;
pub mod rng;
pub mod round;
pub mod view;
pub mod words;

#[cfg(test)]
mod tests;

pub use claim::{categorize_error, ClaimState};
pub use rng::{WordRng, XorShiftRng};
pub use round::{GameStatus, InputOutcome, RoundState};
pub use view::{GameView, LetterCell};
pub use words::{scramble, UsageLedger, WordStore, WordSupply};
