//! Error types for the Pontoon bridge contract

use common::{SignatureError, SwapState};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    #[error("Bridge is paused")]
    BridgePaused,

    // ========================================================================
    // Token Registry Errors
    // ========================================================================

    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("Symbol already registered: {symbol}")]
    DuplicateSymbol { symbol: String },

    #[error("Invalid symbol {symbol:?}: {reason}")]
    InvalidSymbol { symbol: String, reason: String },

    // ========================================================================
    // Request Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Signature Errors
    // ========================================================================

    #[error("Invalid signature: {reason}")]
    InvalidSignature { reason: String },

    #[error("Unauthorized signer: expected {expected}, recovered {recovered}")]
    UnauthorizedSigner { expected: String, recovered: String },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Message already swapped: {message} (state {state:?})")]
    AlreadySwapped { message: String, state: SwapState },

    #[error("Message already redeemed: {message}")]
    AlreadyRedeemed { message: String },
}

impl From<SignatureError> for ContractError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidAddress { reason } => ContractError::InvalidAddress { reason },
            other => ContractError::InvalidSignature {
                reason: other.to_string(),
            },
        }
    }
}
