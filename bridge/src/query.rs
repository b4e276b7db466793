//! Query handlers for the Pontoon bridge contract.

use common::MessageKey;
use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Uint128, Uint256};
use cw_storage_plus::Bound;

use crate::ledger;
use crate::msg::{
    CoinResponse, CoinsResponse, ConfigResponse, MessageKeyResponse, PendingAdminResponse,
    StatsResponse, SwapStateResponse,
};
use crate::registry;
use crate::state::{COINS, CONFIG, PENDING_ADMIN, STATS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        pool: config.pool,
        paused: config.paused,
        swap_policy: config.swap_policy,
        redeem_policy: config.redeem_policy,
    })
}

// ============================================================================
// Token Registry Queries
// ============================================================================

pub fn query_coin_address_by_symbol(deps: Deps, symbol: String) -> StdResult<CoinResponse> {
    let token = registry::get_handle(deps.storage, &symbol)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(CoinResponse { symbol, token })
}

pub fn query_coins(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<CoinsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let coins = COINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (symbol, token) = item?;
            Ok(CoinResponse { symbol, token })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(CoinsResponse { coins })
}

// ============================================================================
// Ledger Queries
// ============================================================================

pub fn query_swap_state(deps: Deps, message: String) -> StdResult<SwapStateResponse> {
    let state = ledger::get_state(deps.storage, &MessageKey::from_raw(message.as_str()))?;
    Ok(SwapStateResponse {
        message,
        state,
        ordinal: state.ordinal(),
    })
}

pub fn query_message_key(
    transaction_number: Uint128,
    amount: Uint256,
    symbol: String,
) -> StdResult<MessageKeyResponse> {
    let key = MessageKey::new(transaction_number, amount, &symbol);
    Ok(MessageKeyResponse {
        digest: Binary::from(key.signing_digest().to_vec()),
        message: key.into_string(),
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.may_load(deps.storage)?.unwrap_or_default();
    Ok(StatsResponse {
        total_swaps: stats.total_swaps,
        total_redeems: stats.total_redeems,
    })
}

pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}
