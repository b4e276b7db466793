//! Recoverable ECDSA signature in the EVM `(v, r, s)` split form.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::error::SignatureError;

/// As returned by `eth_sign` wallets, split into components.
#[cw_serde]
pub struct Signature {
    /// Recovery id, 27/28 (legacy) or 0/1
    pub v: u8,
    /// 32-byte `r` scalar
    pub r: Binary,
    /// 32-byte `s` scalar
    pub s: Binary,
}

impl Signature {
    pub fn new(v: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self {
            v,
            r: Binary::from(r.to_vec()),
            s: Binary::from(s.to_vec()),
        }
    }

    /// Recovery param in the 0/1 form expected by `secp256k1_recover_pubkey`.
    pub fn recovery_param(&self) -> Result<u8, SignatureError> {
        match self.v {
            0 | 1 => Ok(self.v),
            27 | 28 => Ok(self.v - 27),
            v => Err(SignatureError::InvalidRecoveryId { v }),
        }
    }

    /// `r || s`, the 64-byte compact encoding.
    pub fn compact(&self) -> Result<[u8; 64], SignatureError> {
        if self.r.len() != 32 {
            return Err(SignatureError::InvalidComponentLength {
                component: "r",
                len: self.r.len(),
            });
        }
        if self.s.len() != 32 {
            return Err(SignatureError::InvalidComponentLength {
                component: "s",
                len: self.s.len(),
            });
        }
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..].copy_from_slice(self.s.as_slice());
        Ok(out)
    }
}
