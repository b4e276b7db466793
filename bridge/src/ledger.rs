//! Per-message swap/redeem state machine.
//!
//! ```text
//! Unset ──record_swap──▶ Swapped ──record_redeem──▶ Redeemed
//!   └──────────────record_redeem──────────────────────▲
//! ```
//!
//! Each bridge instance keeps its own ledger: the source chain only ever
//! sees `Swapped`, the destination chain usually goes straight to `Redeemed`.

use common::{MessageKey, SwapState};
use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::SWAP_STATES;

pub fn get_state(storage: &dyn Storage, key: &MessageKey) -> StdResult<SwapState> {
    Ok(SWAP_STATES
        .may_load(storage, key.as_str())?
        .unwrap_or_default())
}

/// `Unset -> Swapped`. Any existing entry is a replay.
pub fn record_swap(storage: &mut dyn Storage, key: &MessageKey) -> Result<(), ContractError> {
    match get_state(storage, key)? {
        SwapState::Unset => {
            SWAP_STATES.save(storage, key.as_str(), &SwapState::Swapped)?;
            Ok(())
        }
        state => Err(ContractError::AlreadySwapped {
            message: key.to_string(),
            state,
        }),
    }
}

/// `Unset | Swapped -> Redeemed`. Must be called before the payout message
/// is dispatched.
pub fn record_redeem(storage: &mut dyn Storage, key: &MessageKey) -> Result<(), ContractError> {
    if get_state(storage, key)? == SwapState::Redeemed {
        return Err(ContractError::AlreadyRedeemed {
            message: key.to_string(),
        });
    }
    SWAP_STATES.save(storage, key.as_str(), &SwapState::Redeemed)?;
    Ok(())
}
