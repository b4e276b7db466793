//! Common - Wire Types Shared by the Pontoon Bridge Contracts
//!
//! Both sides of a swap must agree byte-for-byte on the message that gets
//! signed, so everything that crosses chains lives here: the canonical
//! message key, the EIP-191 digest, the `(v, r, s)` signature encoding and
//! the EVM address derived from a recovered public key.

pub mod address;
pub mod error;
pub mod hash;
pub mod message;
pub mod signature;
pub mod swap_state;

pub use address::EvmAddress;
pub use error::SignatureError;
pub use hash::{eth_signed_message_hash, keccak256};
pub use message::MessageKey;
pub use signature::Signature;
pub use swap_state::SwapState;
