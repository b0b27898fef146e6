//! The mint-signature endpoint
//!
//! Turns a validated `{walletAddress, points}` body into a signed,
//! 60-second mint authorization: read the signing domain and sale
//! recipient from the reward contract, assemble the request, hash it
//! per EIP-712, and sign with the service key.

use std::time::{SystemTime, UNIX_EPOCH};

use scrabbler_core::mint::{
    points_in_range, token_quantity, MintRequest, MintSignatureResponse, SignMintRequest,
    CELO_CHAIN_ID, NATIVE_CURRENCY, VALIDITY_WINDOW_SECONDS,
};

use crate::abi::{keccak256, Address};
use crate::config::Config;
use crate::eip712::{self, Domain};
use crate::error::ApiError;
use crate::rpc;

/// Handle one `POST /api/generate-mint-signature` body
pub fn generate_mint_signature(
    config: &Config,
    body: &str,
) -> Result<MintSignatureResponse, ApiError> {
    let request: SignMintRequest =
        serde_json::from_str(body).map_err(|_| ApiError::MissingFields)?;
    if request.wallet_address.is_empty() {
        return Err(ApiError::MissingFields);
    }
    if !points_in_range(request.points) {
        return Err(ApiError::PointsOutOfRange);
    }
    let wallet = Address::parse(&request.wallet_address)?;

    let (domain, primary_sale_recipient) = fetch_contract_context(config)?;
    log::debug!(
        "contract domain: {} v{} chain {}",
        domain.name,
        domain.version,
        domain.chain_id
    );

    let now = unix_now()?;
    let mint_request = MintRequest {
        to: wallet.to_checksum(),
        primary_sale_recipient: primary_sale_recipient.to_checksum(),
        quantity: token_quantity(request.points),
        price: "0".to_string(),
        currency: NATIVE_CURRENCY.to_string(),
        validity_start_timestamp: now,
        validity_end_timestamp: now + VALIDITY_WINDOW_SECONDS,
        uid: generate_uid(wallet, request.points, now)?,
    };

    let digest = eip712::signing_digest(&domain, &mint_request)?;
    let signature = eip712::sign_digest(&config.signing_key, &digest)?;
    let signer_address = eip712::signer_address(&config.signing_key).to_checksum();

    log::info!(
        "signed mint authorization for {} ({} points)",
        mint_request.to,
        request.points
    );

    Ok(MintSignatureResponse {
        mint_request,
        signature,
        signer_address,
    })
}

/// Read the EIP-712 domain and sale recipient from the contract,
/// enforcing the expected chain.
fn fetch_contract_context(config: &Config) -> Result<(Domain, Address), ApiError> {
    // eip712Domain() returns (bytes1 fields, string name, string
    // version, uint256 chainId, address verifyingContract, bytes32
    // salt, uint256[] extensions); head slots 1 and 2 are offsets to
    // the name and version strings.
    let domain_ret = rpc::eth_call(
        &config.rpc_url,
        config.contract_address,
        "eip712Domain()",
    )?;
    let domain = Domain {
        name: domain_ret.string_at(1)?,
        version: domain_ret.string_at(2)?,
        chain_id: domain_ret.u64_at(3)?,
        verifying_contract: domain_ret.address_at(4)?,
    };
    if domain.name.is_empty() || domain.version.is_empty() {
        return Err(ApiError::rpc("contract returned an empty signing domain"));
    }
    if domain.chain_id != CELO_CHAIN_ID {
        return Err(ApiError::rpc(format!(
            "chain ID mismatch: expected {CELO_CHAIN_ID}, got {}",
            domain.chain_id
        )));
    }

    let recipient_ret = rpc::eth_call(
        &config.rpc_url,
        config.contract_address,
        "primarySaleRecipient()",
    )?;
    let recipient = recipient_ret.address_at(0)?;

    Ok((domain, recipient))
}

fn unix_now() -> Result<u64, ApiError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| ApiError::internal("system clock before unix epoch"))
}

/// A per-request unique id: keccak over the request identity plus
/// fresh entropy, so two identical claims never share a uid.
fn generate_uid(wallet: Address, points: u32, now: u64) -> Result<String, ApiError> {
    let mut entropy = [0u8; 16];
    getrandom::getrandom(&mut entropy)
        .map_err(|e| ApiError::internal(format!("entropy source failed: {e}")))?;
    let preimage = format!(
        "{}-{points}-{now}-{}",
        wallet.to_checksum(),
        hex::encode(entropy)
    );
    Ok(format!("0x{}", hex::encode(keccak256(preimage.as_bytes()))))
}
