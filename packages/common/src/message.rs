//! Canonical swap/redeem message.
//!
//! The message is the decimal transaction number, the decimal amount and the
//! destination symbol concatenated with no separator:
//!
//! ```text
//! transaction_number = 1
//! amount             = 10000000000000000000   (10e18, smallest unit)
//! symbol_to          = USDT_ETH
//! key                = "110000000000000000000USDT_ETH"
//! ```
//!
//! The same string is the ledger key on both chains and the payload the
//! authority signs, so it must only ever be built through [`MessageKey::new`].

use std::fmt;

use cosmwasm_std::{Uint128, Uint256};

use crate::hash::eth_signed_message_hash;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageKey(String);

impl MessageKey {
    pub fn new(transaction_number: Uint128, amount: Uint256, symbol_to: &str) -> Self {
        Self(format!("{transaction_number}{amount}{symbol_to}"))
    }

    /// Wrap a key received from outside (a relayer query).
    ///
    /// No parsing is attempted: the concatenation is not reversible, and the
    /// ledger only ever compares keys for equality.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// EIP-191 digest the signer commits to.
    pub fn signing_digest(&self) -> [u8; 32] {
        eth_signed_message_hash(self.as_bytes())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
