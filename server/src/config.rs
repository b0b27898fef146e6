//! Environment-driven service configuration

use k256::ecdsa::SigningKey;

use crate::abi::Address;
use crate::error::ApiError;

/// Default JSON-RPC endpoint (Celo mainnet)
pub const DEFAULT_RPC_URL: &str = "https://forno.celo.org";
/// Default reward token contract
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x0De029d8A773425219945A21386ae11f76Bb7e08";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8787;

/// Resolved service configuration, loaded once at startup
pub struct Config {
    pub signing_key: SigningKey,
    pub rpc_url: String,
    pub contract_address: Address,
    pub port: u16,
}

impl Config {
    /// Load from environment variables: `SIGNER_PRIVATE_KEY`
    /// (required, 0x-prefixed 32-byte hex), `RPC_URL`,
    /// `CONTRACT_ADDRESS`, and `PORT` (all optional).
    pub fn from_env() -> Result<Self, ApiError> {
        let raw_key = std::env::var("SIGNER_PRIVATE_KEY")
            .map_err(|_| ApiError::Configuration("Private key not found".into()))?;
        let signing_key = parse_signing_key(&raw_key)?;

        let rpc_url =
            std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let raw_contract = std::env::var("CONTRACT_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_CONTRACT_ADDRESS.to_string());
        let contract_address = Address::parse(&raw_contract)
            .map_err(|_| ApiError::Configuration("Invalid contract address".into()))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ApiError::Configuration("Invalid PORT value".into()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            signing_key,
            rpc_url,
            contract_address,
            port,
        })
    }
}

/// Parse and validate a 0x-prefixed 32-byte hex private key
pub fn parse_signing_key(raw: &str) -> Result<SigningKey, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "your_private_key_here_replace_with_actual_key" {
        return Err(ApiError::Configuration(
            "Please configure your private key".into(),
        ));
    }
    let hex_part = trimmed.strip_prefix("0x").ok_or_else(|| {
        ApiError::Configuration("Invalid private key format".into())
    })?;
    if hex_part.len() != 64 {
        return Err(ApiError::Configuration("Invalid private key format".into()));
    }
    let bytes = hex::decode(hex_part)
        .map_err(|_| ApiError::Configuration("Invalid private key format".into()))?;
    SigningKey::from_slice(&bytes)
        .map_err(|_| ApiError::Configuration("Invalid private key".into()))
}
