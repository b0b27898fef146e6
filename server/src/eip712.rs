//! EIP-712 typed-data hashing and signing for mint authorizations

use k256::ecdsa::SigningKey;
use scrabbler_core::mint::MintRequest;

use crate::abi::{keccak256, u128_word, Address};
use crate::error::ApiError;

const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";
const MINT_REQUEST_TYPE: &str = "MintRequest(address to,address primarySaleRecipient,\
uint256 quantity,uint256 price,address currency,uint128 validityStartTimestamp,\
uint128 validityEndTimestamp,bytes32 uid)";

/// The signing domain a contract reports via `eip712Domain()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: Address,
}

impl Domain {
    /// `hashStruct(EIP712Domain)` per EIP-712
    pub fn separator(&self) -> [u8; 32] {
        let mut encoded = Vec::with_capacity(5 * 32);
        encoded.extend_from_slice(&keccak256(DOMAIN_TYPE.as_bytes()));
        encoded.extend_from_slice(&keccak256(self.name.as_bytes()));
        encoded.extend_from_slice(&keccak256(self.version.as_bytes()));
        encoded.extend_from_slice(&u128_word(self.chain_id as u128));
        encoded.extend_from_slice(&self.verifying_contract.to_word());
        keccak256(&encoded)
    }
}

/// `hashStruct(MintRequest)` over the wire-format request
pub fn mint_request_hash(request: &MintRequest) -> Result<[u8; 32], ApiError> {
    let to = Address::parse(&request.to)?;
    let recipient = Address::parse(&request.primary_sale_recipient)
        .map_err(|_| ApiError::internal("invalid primarySaleRecipient"))?;
    let currency = Address::parse(&request.currency)
        .map_err(|_| ApiError::internal("invalid currency address"))?;
    let quantity: u128 = request
        .quantity
        .parse()
        .map_err(|_| ApiError::internal("quantity out of range"))?;
    let price: u128 = request
        .price
        .parse()
        .map_err(|_| ApiError::internal("price out of range"))?;
    let uid = parse_bytes32(&request.uid)?;

    let mut encoded = Vec::with_capacity(9 * 32);
    encoded.extend_from_slice(&keccak256(MINT_REQUEST_TYPE.as_bytes()));
    encoded.extend_from_slice(&to.to_word());
    encoded.extend_from_slice(&recipient.to_word());
    encoded.extend_from_slice(&u128_word(quantity));
    encoded.extend_from_slice(&u128_word(price));
    encoded.extend_from_slice(&currency.to_word());
    encoded.extend_from_slice(&u128_word(request.validity_start_timestamp as u128));
    encoded.extend_from_slice(&u128_word(request.validity_end_timestamp as u128));
    encoded.extend_from_slice(&uid);
    Ok(keccak256(&encoded))
}

/// The digest actually signed: `keccak256(0x1901 || domainSeparator ||
/// hashStruct(message))`
pub fn signing_digest(domain: &Domain, request: &MintRequest) -> Result<[u8; 32], ApiError> {
    let mut preimage = Vec::with_capacity(2 + 64);
    preimage.extend_from_slice(&[0x19, 0x01]);
    preimage.extend_from_slice(&domain.separator());
    preimage.extend_from_slice(&mint_request_hash(request)?);
    Ok(keccak256(&preimage))
}

/// Sign a typed-data digest, returning the 65-byte `r || s || v`
/// signature as 0x-prefixed hex (`v` in {27, 28})
pub fn sign_digest(key: &SigningKey, digest: &[u8; 32]) -> Result<String, ApiError> {
    let (signature, recovery_id) = key
        .sign_prehash_recoverable(digest)
        .map_err(|e| ApiError::internal(format!("signing failed: {e}")))?;
    let mut bytes = [0u8; 65];
    bytes[..64].copy_from_slice(&signature.to_bytes());
    bytes[64] = 27 + recovery_id.to_byte();
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// The Ethereum account address controlled by a signing key
pub fn signer_address(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address(bytes)
}

fn parse_bytes32(raw: &str) -> Result<[u8; 32], ApiError> {
    let hex_part = raw
        .strip_prefix("0x")
        .ok_or_else(|| ApiError::internal("uid missing 0x prefix"))?;
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(hex_part, &mut bytes)
        .map_err(|_| ApiError::internal("uid is not 32 bytes of hex"))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrabbler_core::mint::NATIVE_CURRENCY;

    fn test_key() -> SigningKey {
        let bytes =
            hex::decode("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")
                .unwrap();
        SigningKey::from_slice(&bytes).unwrap()
    }

    fn test_domain() -> Domain {
        Domain {
            name: "TokenERC20".into(),
            version: "1".into(),
            chain_id: 42220,
            verifying_contract: Address::parse("0x0De029d8A773425219945A21386ae11f76Bb7e08")
                .unwrap(),
        }
    }

    fn test_request() -> MintRequest {
        MintRequest {
            to: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".into(),
            primary_sale_recipient: "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359".into(),
            quantity: "100000000000000000000".into(),
            price: "0".into(),
            currency: NATIVE_CURRENCY.into(),
            validity_start_timestamp: 1_700_000_000,
            validity_end_timestamp: 1_700_000_060,
            uid: format!("0x{}", "ab".repeat(32)),
        }
    }

    #[test]
    fn signer_address_matches_known_key() {
        // ethers.Wallet address for the test key
        assert_eq!(
            signer_address(&test_key()).to_checksum(),
            "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23"
        );
    }

    #[test]
    fn signature_is_65_bytes_with_legacy_v() {
        let digest = signing_digest(&test_domain(), &test_request()).unwrap();
        let sig = sign_digest(&test_key(), &digest).unwrap();
        let bytes = hex::decode(sig.strip_prefix("0x").unwrap()).unwrap();
        assert_eq!(bytes.len(), 65);
        assert!(bytes[64] == 27 || bytes[64] == 28);
    }

    #[test]
    fn digest_changes_with_every_field() {
        let domain = test_domain();
        let base = signing_digest(&domain, &test_request()).unwrap();

        let mut r = test_request();
        r.quantity = "1000000000000000000".into();
        assert_ne!(base, signing_digest(&domain, &r).unwrap());

        let mut r = test_request();
        r.validity_end_timestamp += 1;
        assert_ne!(base, signing_digest(&domain, &r).unwrap());

        let mut r = test_request();
        r.uid = format!("0x{}", "cd".repeat(32));
        assert_ne!(base, signing_digest(&domain, &r).unwrap());

        let mut other_domain = test_domain();
        other_domain.chain_id = 1;
        assert_ne!(base, signing_digest(&other_domain, &test_request()).unwrap());
    }

    #[test]
    fn domain_separator_is_deterministic() {
        assert_eq!(test_domain().separator(), test_domain().separator());
    }

    #[test]
    fn rejects_malformed_uid() {
        let mut request = test_request();
        request.uid = "0x1234".into();
        assert!(mint_request_hash(&request).is_err());
        request.uid = "ab".repeat(32);
        assert!(mint_request_hash(&request).is_err());
    }
}
