//! Error types for the Pontoon pool contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: {caller} does not hold the BRIDGE capability")]
    MissingBridgeCapability { caller: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Insufficient allowance: pool may pull {available}, needs {required}")]
    InsufficientAllowance { available: Uint128, required: Uint128 },

    #[error("Insufficient balance: payer holds {available}, needs {required}")]
    InsufficientBalance { available: Uint128, required: Uint128 },

    #[error("Insufficient pool balance of {token}: holds {available}, needs {required}")]
    InsufficientPoolBalance {
        token: String,
        available: Uint128,
        required: Uint128,
    },
}
