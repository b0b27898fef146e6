//! Mint-authorization wire contract
//!
//! The request/response shapes exchanged with the signature service,
//! pinned here because they are the one externally observable
//! contract the game owns. Field names follow the JSON wire format.

use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Smallest claimable score
pub const MIN_CLAIM_POINTS: u32 = 1;
/// Largest claimable score (1000 tokens)
pub const MAX_CLAIM_POINTS: u32 = 1000;
/// Seconds a signed mint authorization stays valid
pub const VALIDITY_WINDOW_SECONDS: u64 = 60;
/// Celo mainnet
pub const CELO_CHAIN_ID: u64 = 42220;
/// Native-currency placeholder address used for free mints
pub const NATIVE_CURRENCY: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
/// Token decimals
pub const TOKEN_DECIMALS: u32 = 18;

/// Body of `POST /api/generate-mint-signature`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMintRequest {
    pub wallet_address: String,
    pub points: u32,
}

/// A signed, time-bounded permission to mint `quantity` tokens to
/// `to`. Numeric fields travel as decimal strings; `uid` and
/// addresses as 0x-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub to: String,
    pub primary_sale_recipient: String,
    pub quantity: String,
    pub price: String,
    pub currency: String,
    pub validity_start_timestamp: u64,
    pub validity_end_timestamp: u64,
    pub uid: String,
}

/// Successful response of the signature service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintSignatureResponse {
    pub mint_request: MintRequest,
    pub signature: String,
    pub signer_address: String,
}

/// Error body returned with 400/500/503 statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Validate a claimed score against the 1..=1000 token bounds
pub fn points_in_range(points: u32) -> bool {
    (MIN_CLAIM_POINTS..=MAX_CLAIM_POINTS).contains(&points)
}

/// Token quantity for a score, as a base-unit decimal string
/// (points x 10^18; fits u128 comfortably at the 1000-point cap)
pub fn token_quantity(points: u32) -> String {
    let base: u128 = 10u128.pow(TOKEN_DECIMALS);
    format!("{}", points as u128 * base)
}
