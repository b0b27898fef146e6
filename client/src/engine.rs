//! Game engine for browser WASM builds
//!
//! This module provides the main game engine exposed to JavaScript
//! via wasm-bindgen. The host drives the two periodic timers (1 s
//! countdown, 10 s letter reveal) with `setInterval` and must pass
//! the engine's current timer token on every tick: the token changes
//! whenever the round it was issued for is superseded, so an interval
//! that outlives its round can never mutate a fresh session.

use parity_scale_codec::{Decode, Encode};
use scrabbler_core::log;
use scrabbler_core::round::{GameStatus, RoundState};
use scrabbler_core::view::GameView;
use scrabbler_core::words::{parse_custom_words, WordSupply};
use scrabbler_core::{ClaimState, WordStore, XorShiftRng};
use wasm_bindgen::prelude::*;

use crate::storage::LocalWordStore;

/// SCALE snapshot of a session: the active round plus the word
/// supply's exhaustion ledger. Claim state is deliberately not
/// persisted; an interrupted claim restarts from idle.
#[derive(Encode, Decode)]
struct SessionSnapshot {
    round: RoundState,
    supply: WordSupply,
}

/// The main game engine exposed to WASM
#[wasm_bindgen]
pub struct GameEngine {
    supply: WordSupply,
    round: RoundState,
    claim: ClaimState,
    rng: XorShiftRng,
    store: LocalWordStore,
    // Bumped whenever the current round is superseded; stale timer
    // callbacks carry the old value and are dropped.
    timer_generation: u32,
}

#[wasm_bindgen]
impl GameEngine {
    /// Create a new game engine with an optional seed (entropy-seeded
    /// when absent)
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Self {
        log::info("=== SPEED SCRABBLER ENGINE INITIALIZED ===");
        let mut rng = XorShiftRng::seed_from_u64(seed.unwrap_or_else(entropy_seed));
        let mut supply = WordSupply::new();
        let store = LocalWordStore::new();
        let round = RoundState::start(&mut supply, &store, &mut rng);
        Self {
            supply,
            round,
            claim: ClaimState::Idle,
            rng,
            store,
            timer_generation: 0,
        }
    }

    /// Token the host must pass back with every timer tick
    #[wasm_bindgen]
    pub fn timer_token(&self) -> u32 {
        self.timer_generation
    }

    /// Start an entirely new game: fresh round, exhaustion ledger
    /// cleared, claim flow back to idle, previous timers invalidated.
    #[wasm_bindgen]
    pub fn new_game(&mut self) {
        log::action("new_game", "starting fresh session");
        self.timer_generation += 1;
        self.supply.reset_ledger();
        self.round = RoundState::start(&mut self.supply, &self.store, &mut self.rng);
        self.claim = ClaimState::Idle;
    }

    /// Countdown tick (1 s cadence). Stale tokens no-op.
    #[wasm_bindgen]
    pub fn tick(&mut self, token: u32) {
        if token != self.timer_generation {
            return;
        }
        self.round.tick();
        if self.round.status == GameStatus::GameOver {
            // Leaving `playing` cancels both timers
            self.timer_generation += 1;
        }
    }

    /// Letter-reveal tick (10 s cadence). Stale tokens no-op.
    #[wasm_bindgen]
    pub fn reveal_tick(&mut self, token: u32) {
        if token != self.timer_generation {
            return;
        }
        self.round.reveal_tick();
    }

    /// Replace the input buffer with the text field's value and
    /// auto-check on a complete word. Returns the outcome as JSON.
    #[wasm_bindgen]
    pub fn set_input(&mut self, raw: &str) -> JsValue {
        let outcome = self
            .round
            .apply_input(raw, &mut self.supply, &self.store, &mut self.rng);
        serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
    }

    /// Get the current game view as JSON
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        let view = GameView::from_state(&self.round, &self.claim);
        match serde_wasm_bindgen::to_value(&view) {
            Ok(val) => val,
            Err(e) => {
                log::error(&format!("get_view serialization failed: {e:?}"));
                JsValue::NULL
            }
        }
    }

    /// Terminal score exposed to the claim flow
    #[wasm_bindgen]
    pub fn final_score(&self) -> u32 {
        self.round.score
    }

    // ── Claim flow (host drives the external steps) ──────────────

    /// Start claiming the terminal score
    #[wasm_bindgen]
    pub fn begin_claim(&mut self, wallet_connected: bool) {
        self.claim.begin(self.round.score, wallet_connected);
    }

    /// The signature service responded
    #[wasm_bindgen]
    pub fn signature_ready(&mut self) {
        self.claim.signature_ready();
    }

    /// The mint transaction was sent
    #[wasm_bindgen]
    pub fn tx_submitted(&mut self, tx_hash: &str) {
        self.claim.tx_submitted(tx_hash);
    }

    /// The mint transaction confirmed
    #[wasm_bindgen]
    pub fn tx_confirmed(&mut self) {
        self.claim.tx_confirmed();
    }

    /// Any claim step failed; `message` is the raw upstream error
    #[wasm_bindgen]
    pub fn tx_failed(&mut self, message: &str) {
        self.claim.fail(message);
    }

    /// Dismiss a claim error and allow a retry
    #[wasm_bindgen]
    pub fn reset_claim(&mut self) {
        self.claim.reset();
    }

    // ── Custom word list (backs the custom-words screen) ─────────

    /// Raw saved custom word list, newline-delimited
    #[wasm_bindgen]
    pub fn load_custom_words(&self) -> String {
        self.store.get().unwrap_or_default()
    }

    /// Normalize and persist a custom word list; returns how many
    /// words were kept (3-9 letters, A-Z, capped at 100)
    #[wasm_bindgen]
    pub fn save_custom_words(&mut self, text: &str) -> u32 {
        let words = parse_custom_words(text);
        let count = words.len() as u32;
        self.store.set(&words.join("\n"));
        log::action("save_custom_words", &format!("{count} words"));
        count
    }

    /// Remove all saved custom words
    #[wasm_bindgen]
    pub fn clear_custom_words(&mut self) {
        self.store.clear();
    }

    /// Number of currently saved custom words
    #[wasm_bindgen]
    pub fn custom_word_count(&self) -> u32 {
        self.store
            .get()
            .map(|raw| parse_custom_words(&raw).len() as u32)
            .unwrap_or(0)
    }

    // ── Session snapshot (SCALE round-trip, host persists it) ────

    /// Encode the active session for persistence across reloads
    #[wasm_bindgen]
    pub fn session_snapshot(&self) -> Vec<u8> {
        SessionSnapshot {
            round: self.round.clone(),
            supply: self.supply.clone(),
        }
        .encode()
    }

    /// Restore a previously snapshotted session. Invalidates any
    /// running timers; the host restarts them against the restored
    /// round.
    #[wasm_bindgen]
    pub fn restore_session(&mut self, bytes: &[u8]) -> Result<(), String> {
        let snapshot = SessionSnapshot::decode(&mut &bytes[..])
            .map_err(|e| format!("Failed to decode session: {e:?}"))?;
        self.timer_generation += 1;
        self.round = snapshot.round;
        self.supply = snapshot.supply;
        self.claim = ClaimState::Idle;
        Ok(())
    }
}

/// Seed from host entropy, falling back to a fixed seed if the
/// entropy source is unavailable
fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => 0x5eed_0001,
    }
}
