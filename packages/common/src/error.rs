use thiserror::Error;

/// Malformed signature material. Never a policy decision: a well-formed
/// signature from the wrong key is reported by the caller, not here.
#[derive(Error, Debug, PartialEq)]
pub enum SignatureError {
    #[error("recovery id v={v} is not one of 0, 1, 27, 28")]
    InvalidRecoveryId { v: u8 },

    #[error("{component} must be 32 bytes, got {len}")]
    InvalidComponentLength { component: &'static str, len: usize },

    #[error("public key must be 65 bytes uncompressed, got {len}")]
    InvalidPublicKey { len: usize },

    #[error("invalid EVM address: {reason}")]
    InvalidAddress { reason: String },
}
