//! Ethereum encoding primitives
//!
//! Just enough ABI to issue two view calls and hash EIP-712 structs:
//! keccak-256, 20-byte addresses with EIP-55 checksums, 32-byte word
//! encoding, and head/tail decoding for the one dynamic return type
//! we consume (strings).

use tiny_keccak::{Hasher, Keccak};

use crate::error::ApiError;

/// keccak-256 of arbitrary bytes
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// First four bytes of the keccak-256 of a function signature
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// A 20-byte Ethereum account address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Parse a 0x-prefixed hex address. Mixed-case input must carry a
    /// valid EIP-55 checksum; all-lowercase and all-uppercase inputs
    /// are accepted as unchecksummed.
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        let hex_part = input
            .strip_prefix("0x")
            .ok_or(ApiError::InvalidWalletAddress)?;
        if hex_part.len() != 40 {
            return Err(ApiError::InvalidWalletAddress);
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(hex_part, &mut bytes)
            .map_err(|_| ApiError::InvalidWalletAddress)?;

        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            let checksummed = Self(bytes).to_checksum();
            if checksummed[2..] != *hex_part {
                return Err(ApiError::InvalidWalletAddress);
            }
        }
        Ok(Self(bytes))
    }

    /// EIP-55 checksummed rendering, 0x-prefixed
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0xf;
            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// The address left-padded into a 32-byte ABI word
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

/// A u128 right-aligned in a 32-byte ABI word
pub fn u128_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Return data of an `eth_call`, decoded word-by-word
pub struct ReturnData {
    data: Vec<u8>,
}

impl ReturnData {
    /// Decode a 0x-prefixed hex return payload
    pub fn from_hex(raw: &str) -> Result<Self, ApiError> {
        let hex_part = raw.strip_prefix("0x").unwrap_or(raw);
        let data = hex::decode(hex_part)
            .map_err(|_| ApiError::rpc("return data is not valid hex"))?;
        Ok(Self { data })
    }

    /// The 32-byte word at head slot `index`
    pub fn word(&self, index: usize) -> Result<[u8; 32], ApiError> {
        let start = index * 32;
        let end = start + 32;
        if end > self.data.len() {
            return Err(ApiError::rpc("return data truncated"));
        }
        let mut word = [0u8; 32];
        word.copy_from_slice(&self.data[start..end]);
        Ok(word)
    }

    /// The word at head slot `index` as a u64 (upper bytes must be 0)
    pub fn u64_at(&self, index: usize) -> Result<u64, ApiError> {
        let word = self.word(index)?;
        if word[..24].iter().any(|b| *b != 0) {
            return Err(ApiError::rpc("numeric return value out of range"));
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&word[24..]);
        Ok(u64::from_be_bytes(bytes))
    }

    /// The word at head slot `index` as an address
    pub fn address_at(&self, index: usize) -> Result<Address, ApiError> {
        let word = self.word(index)?;
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..]);
        Ok(Address(bytes))
    }

    /// Follow the offset in head slot `index` to a dynamic string.
    /// Offsets and lengths come off the wire, so all arithmetic is
    /// checked; a hostile RPC must not be able to panic the server.
    pub fn string_at(&self, index: usize) -> Result<String, ApiError> {
        let offset_word = self.word(index)?;
        let offset = word_to_usize(&offset_word)?;
        let start = offset
            .checked_add(32)
            .ok_or_else(|| ApiError::rpc("string offset out of bounds"))?;
        if start > self.data.len() {
            return Err(ApiError::rpc("string offset out of bounds"));
        }
        let mut len_word = [0u8; 32];
        len_word.copy_from_slice(&self.data[offset..start]);
        let len = word_to_usize(&len_word)?;
        let end = start
            .checked_add(len)
            .ok_or_else(|| ApiError::rpc("string data out of bounds"))?;
        if end > self.data.len() {
            return Err(ApiError::rpc("string data out of bounds"));
        }
        String::from_utf8(self.data[start..end].to_vec())
            .map_err(|_| ApiError::rpc("string data is not valid UTF-8"))
    }
}

fn word_to_usize(word: &[u8; 32]) -> Result<usize, ApiError> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(ApiError::rpc("offset out of range"));
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(bytes))
        .map_err(|_| ApiError::rpc("offset out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_known_vectors() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(keccak256(b"abc")),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
        );
    }

    #[test]
    fn selector_matches_transfer() {
        assert_eq!(selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn checksums_known_addresses() {
        for addr in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0x0De029d8A773425219945A21386ae11f76Bb7e08",
        ] {
            let parsed = Address::parse(addr).unwrap();
            assert_eq!(parsed.to_checksum(), addr);
        }
    }

    #[test]
    fn accepts_unchecksummed_lowercase() {
        let parsed = Address::parse("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(parsed.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn rejects_bad_checksum_and_shape() {
        assert!(Address::parse("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1Beaed").is_err());
        assert!(Address::parse("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
        assert!(Address::parse("0x1234").is_err());
        assert!(Address::parse("0xZZeb6053F3E94C9b9A09f33669435E7Ef1BeAed1").is_err());
    }

    #[test]
    fn decodes_dynamic_string_return() {
        // abi.encode(uint256(7), string("TokenERC20"))
        let mut data = Vec::new();
        data.extend_from_slice(&u128_word(7));
        data.extend_from_slice(&u128_word(64));
        data.extend_from_slice(&u128_word(10));
        let mut tail = [0u8; 32];
        tail[..10].copy_from_slice(b"TokenERC20");
        data.extend_from_slice(&tail);

        let ret = ReturnData { data };
        assert_eq!(ret.u64_at(0).unwrap(), 7);
        assert_eq!(ret.string_at(1).unwrap(), "TokenERC20");
    }

    #[test]
    fn rejects_truncated_return() {
        let ret = ReturnData { data: vec![0u8; 16] };
        assert!(ret.word(0).is_err());
    }

    #[test]
    fn rejects_wrapping_string_offset_and_length() {
        let max_word = {
            let mut word = [0u8; 32];
            word[24..].copy_from_slice(&u64::MAX.to_be_bytes());
            word
        };

        // Head offset of u64::MAX would wrap past the end check
        let ret = ReturnData {
            data: max_word.to_vec(),
        };
        assert!(ret.string_at(0).is_err());

        // Valid offset, string length of u64::MAX
        let mut data = Vec::new();
        data.extend_from_slice(&u128_word(32));
        data.extend_from_slice(&max_word);
        let ret = ReturnData { data };
        assert!(ret.string_at(0).is_err());
    }
}
