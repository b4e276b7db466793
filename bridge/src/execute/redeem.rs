//! Redeem handler (destination chain).

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

/// Pay `amount` of `symbol` to the caller once the redeem signer has signed
/// the message. The ledger is marked REDEEMED before the pool `Release` is
/// dispatched, so a nested redeem of the same key fails.
pub fn execute_redeem(
    deps: DepsMut,
    info: MessageInfo,
    transaction_number: Uint128,
    amount: Uint256,
    symbol: String,
    signature: Signature,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let token = registry::get_handle(deps.storage, &symbol)?;
    let transfer = transfer_amount(amount)?;

    let message = MessageKey::new(transaction_number, amount, &symbol);
    let signer = config
        .redeem_policy
        .authorize(deps.api, &message, &signature, &info.sender)?;

    ledger::record_redeem(deps.storage, &message)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_redeems += 1;
        Ok(stats)
    })?;

    let release = WasmMsg::Execute {
        contract_addr: config.pool.to_string(),
        msg: to_json_binary(&pool::msg::ExecuteMsg::Release {
            recipient: info.sender.to_string(),
            token: token.to_string(),
            amount: transfer,
        })?,
        funds: vec![],
    };

    let event = Event::new("redeem")
        .add_attribute("transaction_number", transaction_number.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("symbol", &symbol)
        .add_attribute("message", message.as_str())
        .add_attribute("recipient", info.sender.as_str())
        .add_attribute("signer", signer.to_hex());

    Ok(Response::new()
        .add_message(release)
        .add_event(event)
        .add_attribute("method", "redeem")
        .add_attribute("message", message.into_string())
        .add_attribute("token", token))
}
