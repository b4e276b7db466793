//! Execute handlers for the Pontoon bridge contract.
//!
//! - `swap` - Swap handler (source chain)
//! - `redeem` - Redeem handler (destination chain)
//! - `config` - Token registry, pool and signer policy management
//! - `admin` - Pause, unpause and admin transfer

mod admin;
mod config;
mod redeem;
mod swap;

pub use admin::*;
pub use config::*;
pub use redeem::*;
pub use swap::*;

use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

/// Amount the pool moves for a request. Signed amounts are 256-bit but CW20
/// balances are 128-bit.
pub(crate) fn transfer_amount(amount: Uint256) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    Uint128::try_from(amount).map_err(|_| ContractError::InvalidAmount {
        reason: format!("{amount} exceeds the CW20 range"),
    })
}
