//! Swap handler (source chain).
//!
//! Locks the caller's tokens in the pool and records the message as SWAPPED.
//! The `swap` event is what the off-chain authority watches before signing
//! the matching redeem on the destination chain.

use common::{MessageKey, Signature};
use cosmwasm_std::{
    to_json_binary, DepsMut, Event, MessageInfo, Response, Uint128, Uint256, WasmMsg,
};

use super::transfer_amount;
use crate::auth::Authorizer;
use crate::error::ContractError;
use crate::ledger;
use crate::registry;
use crate::state::{CONFIG, STATS};

pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    transaction_number: Uint128,
    amount: Uint256,
    symbol_to: String,
    symbol_from: String,
    signature: Signature,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let token = registry::get_handle(deps.storage, &symbol_from)?;
    registry::validate_symbol(&symbol_to)?;
    let transfer = transfer_amount(amount)?;

    let message = MessageKey::new(transaction_number, amount, &symbol_to);
    let signer = config
        .swap_policy
        .authorize(deps.api, &message, &signature, &info.sender)?;

    ledger::record_swap(deps.storage, &message)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_swaps += 1;
        Ok(stats)
    })?;

    let deposit = WasmMsg::Execute {
        contract_addr: config.pool.to_string(),
        msg: to_json_binary(&pool::msg::ExecuteMsg::Deposit {
            payer: info.sender.to_string(),
            token: token.to_string(),
            amount: transfer,
        })?,
        funds: vec![],
    };

    let event = Event::new("swap")
        .add_attribute("transaction_number", transaction_number.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("symbol_to", &symbol_to)
        .add_attribute("symbol_from", &symbol_from)
        .add_attribute("message", message.as_str())
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("signer", signer.to_hex());

    Ok(Response::new()
        .add_message(deposit)
        .add_event(event)
        .add_attribute("method", "swap")
        .add_attribute("message", message.into_string())
        .add_attribute("token", token))
}
