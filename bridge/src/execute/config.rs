//! Token registry, pool wiring and signer policy management.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::auth::SignerPolicy;
use crate::error::ContractError;
use crate::registry;
use crate::state::CONFIG;

pub fn execute_add_coin(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    symbol: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let token = deps.api.addr_validate(&token)?;
    registry::add_coin(deps.storage, &token, &symbol)?;

    Ok(Response::new()
        .add_attribute("method", "add_coin")
        .add_attribute("symbol", symbol)
        .add_attribute("token", token))
}

pub fn execute_set_pool(
    deps: DepsMut,
    info: MessageInfo,
    pool: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.pool = deps.api.addr_validate(&pool)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_pool")
        .add_attribute("pool", config.pool))
}

pub fn execute_set_signer_policy(
    deps: DepsMut,
    info: MessageInfo,
    swap_policy: Option<SignerPolicy>,
    redeem_policy: Option<SignerPolicy>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if let Some(policy) = swap_policy {
        config.swap_policy = policy.validated()?;
    }
    if let Some(policy) = redeem_policy {
        config.redeem_policy = policy.validated()?;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_signer_policy")
        .add_attribute("swap_policy", config.swap_policy.label())
        .add_attribute("redeem_policy", config.redeem_policy.label()))
}
