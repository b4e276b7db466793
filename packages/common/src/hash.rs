//! Keccak helpers matching the EVM side of the bridge.

use tiny_keccak::{Hasher, Keccak};

/// Prefix prepended by `personal_sign` / `signMessage` (EIP-191, version 0x45).
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Digest an EVM wallet signs for `signMessage(message)`.
///
/// `keccak256("\x19Ethereum Signed Message:\n" ++ len(message) ++ message)`,
/// with the length written in decimal.
pub fn eth_signed_message_hash(message: &[u8]) -> [u8; 32] {
    let len = message.len().to_string();
    let mut hasher = Keccak::v256();
    hasher.update(ETH_SIGNED_MESSAGE_PREFIX);
    hasher.update(len.as_bytes());
    hasher.update(message);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}
