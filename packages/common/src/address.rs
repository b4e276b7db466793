//! 20-byte EVM account address.

use std::fmt;
use std::str::FromStr;

use crate::error::SignatureError;
use crate::hash::keccak256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EvmAddress([u8; 20]);

impl EvmAddress {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derive the address of an uncompressed secp256k1 public key
    /// (`0x04 || X || Y`): the last 20 bytes of `keccak256(X || Y)`.
    pub fn from_uncompressed_pubkey(pubkey: &[u8]) -> Result<Self, SignatureError> {
        if pubkey.len() != 65 || pubkey[0] != 0x04 {
            return Err(SignatureError::InvalidPublicKey { len: pubkey.len() });
        }
        let hash = keccak256(&pubkey[1..]);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for EvmAddress {
    type Err = SignatureError;

    /// Accepts 40 hex digits with or without `0x`, any case. No EIP-55
    /// checksum validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 40 {
            return Err(SignatureError::InvalidAddress {
                reason: format!("expected 40 hex digits, got {}", digits.len()),
            });
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| SignatureError::InvalidAddress {
            reason: e.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
