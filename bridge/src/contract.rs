//! Pontoon Bridge Contract - Entry Points
//!
//! Handlers live in `execute/` and `query`; this module only dispatches.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_add_coin, execute_cancel_admin_proposal, execute_pause,
    execute_propose_admin, execute_redeem, execute_set_pool, execute_set_signer_policy,
    execute_swap, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_coin_address_by_symbol, query_coins, query_config, query_message_key,
    query_pending_admin, query_stats, query_swap_state,
};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        pool: deps.api.addr_validate(&msg.pool)?,
        paused: false,
        swap_policy: msg.swap_policy.validated()?,
        redeem_policy: msg.redeem_policy.validated()?,
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("pool", config.pool)
        .add_attribute("swap_policy", config.swap_policy.label())
        .add_attribute("redeem_policy", config.redeem_policy.label()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Bridge flow
        ExecuteMsg::Swap {
            transaction_number,
            amount,
            symbol_to,
            symbol_from,
            signature,
        } => execute_swap(
            deps,
            info,
            transaction_number,
            amount,
            symbol_to,
            symbol_from,
            signature,
        ),
        ExecuteMsg::Redeem {
            transaction_number,
            amount,
            symbol,
            signature,
        } => execute_redeem(deps, info, transaction_number, amount, symbol, signature),

        // Registry & wiring
        ExecuteMsg::AddCoin { token, symbol } => execute_add_coin(deps, info, token, symbol),
        ExecuteMsg::SetPool { pool } => execute_set_pool(deps, info, pool),
        ExecuteMsg::SetSignerPolicy {
            swap_policy,
            redeem_policy,
        } => execute_set_signer_policy(deps, info, swap_policy, redeem_policy),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CoinAddressBySymbol { symbol } => {
            to_json_binary(&query_coin_address_by_symbol(deps, symbol)?)
        }
        QueryMsg::Coins { start_after, limit } => {
            to_json_binary(&query_coins(deps, start_after, limit)?)
        }
        QueryMsg::SwapState { message } => to_json_binary(&query_swap_state(deps, message)?),
        QueryMsg::MessageKey {
            transaction_number,
            amount,
            symbol,
        } => to_json_binary(&query_message_key(transaction_number, amount, symbol)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
