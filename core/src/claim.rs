//! Token-claim flow
//!
//! Tracks the signature-then-mint lifecycle that redeems a finished
//! round's score: idle -> generating -> signing -> pending ->
//! success | error. The host drives the external steps (signature
//! fetch, transaction submission); this state machine only validates
//! and orders them, and turns raw upstream errors into user-facing
//! phrases.

use alloc::string::{String, ToString};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::log;

/// Shown when a claim is attempted without a wallet or score
pub const NOT_READY_ERROR: &str = "Please connect your wallet and earn some points first";

/// State of the mint-authorization claim flow
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ClaimState {
    /// Nothing in flight; a claim may be started
    Idle,
    /// Waiting for the signature service
    Generating,
    /// Waiting for the player to sign the transaction
    Signing,
    /// Transaction submitted, awaiting confirmation
    Pending {
        #[serde(rename = "txHash")]
        tx_hash: String,
    },
    /// Tokens minted
    Success {
        #[serde(rename = "txHash")]
        tx_hash: String,
    },
    /// Claim failed; `error` is already user-facing
    Error { error: String },
}

impl Default for ClaimState {
    fn default() -> Self {
        Self::Idle
    }
}

impl ClaimState {
    /// Start a claim for `score` points. Requires a connected wallet
    /// and a positive score; otherwise lands directly in `Error`.
    pub fn begin(&mut self, score: u32, wallet_connected: bool) {
        if !wallet_connected || score == 0 {
            *self = Self::Error {
                error: NOT_READY_ERROR.to_string(),
            };
            return;
        }
        log::action("claim_begin", "requesting signature");
        *self = Self::Generating;
    }

    /// The signature service responded; move to the signing step.
    /// Ignored unless currently generating.
    pub fn signature_ready(&mut self) {
        if matches!(self, Self::Generating) {
            *self = Self::Signing;
        }
    }

    /// The transaction went out; track it until confirmation.
    /// Ignored unless currently signing.
    pub fn tx_submitted(&mut self, tx_hash: &str) {
        if matches!(self, Self::Signing) {
            *self = Self::Pending {
                tx_hash: tx_hash.to_string(),
            };
        }
    }

    /// The transaction confirmed. Ignored unless pending.
    pub fn tx_confirmed(&mut self) {
        if let Self::Pending { tx_hash } = self {
            let tx_hash = core::mem::take(tx_hash);
            log::action("claim_success", &tx_hash);
            *self = Self::Success { tx_hash };
        }
    }

    /// Any in-flight step failed; categorize the raw upstream error
    /// into a user-facing phrase. Ignored when idle or already
    /// terminal.
    pub fn fail(&mut self, raw_error: &str) {
        if matches!(self, Self::Generating | Self::Signing | Self::Pending { .. }) {
            log::warn(raw_error);
            *self = Self::Error {
                error: categorize_error(raw_error),
            };
        }
    }

    /// Back to idle so the player can retry
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Map a raw upstream error message onto a small set of user-facing
/// phrases; unmatched messages pass through as-is.
pub fn categorize_error(raw: &str) -> String {
    let lower: String = raw.to_ascii_lowercase();
    if lower.contains("user rejected") {
        "Transaction was cancelled".to_string()
    } else if lower.contains("insufficient funds") {
        "Insufficient funds for gas fees".to_string()
    } else if lower.contains("network") {
        "Network error. Please check your connection.".to_string()
    } else if lower.contains("timeout") {
        "Request timed out. Please try again.".to_string()
    } else if lower.contains("expired") {
        "Session expired, please claim again".to_string()
    } else if lower.contains("configuration") {
        "Service temporarily unavailable. Please try again later.".to_string()
    } else if raw.is_empty() {
        "Failed to claim reward".to_string()
    } else {
        raw.to_string()
    }
}
