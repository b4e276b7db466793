//! Pontoon Pool Contract - Entry Points and Handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Order,
    Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::msg::{
    BridgesResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, IsBridgeResponse, MigrateMsg,
    PoolBalanceResponse, QueryMsg,
};
use crate::state::{ADMIN, BRIDGES, CONTRACT_NAME, CONTRACT_VERSION, FLOWS};

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

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;

    for bridge in &msg.bridges {
        let bridge = deps.api.addr_validate(bridge)?;
        BRIDGES.save(deps.storage, &bridge, &true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("bridge_count", msg.bridges.len().to_string()))
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
        ExecuteMsg::Deposit {
            payer,
            token,
            amount,
        } => execute_deposit(deps, env, info, payer, token, amount),
        ExecuteMsg::Release {
            recipient,
            token,
            amount,
        } => execute_release(deps, env, info, recipient, token, amount),
        ExecuteMsg::GrantBridge { address } => execute_grant_bridge(deps, info, address),
        ExecuteMsg::RevokeBridge { address } => execute_revoke_bridge(deps, info, address),
    }
}

fn ensure_bridge(deps: Deps, caller: &Addr) -> Result<(), ContractError> {
    if BRIDGES.may_load(deps.storage, caller)?.unwrap_or(false) {
        Ok(())
    } else {
        Err(ContractError::MissingBridgeCapability {
            caller: caller.to_string(),
        })
    }
}

fn cw20_balance(deps: Deps, token: &Addr, holder: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}

/// Pull tokens from the payer into custody.
fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payer: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.as_ref(), &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let payer = deps.api.addr_validate(&payer)?;
    let token = deps.api.addr_validate(&token)?;
    let pool = env.contract.address;

    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        &token,
        &Cw20QueryMsg::Allowance {
            owner: payer.to_string(),
            spender: pool.to_string(),
        },
    )?;
    let available = if allowance.expires.is_expired(&env.block) {
        Uint128::zero()
    } else {
        allowance.allowance
    };
    if available < amount {
        return Err(ContractError::InsufficientAllowance {
            available,
            required: amount,
        });
    }

    let held = cw20_balance(deps.as_ref(), &token, &payer)?;
    if held < amount {
        return Err(ContractError::InsufficientBalance {
            available: held,
            required: amount,
        });
    }

    let mut flow = FLOWS.may_load(deps.storage, &token)?.unwrap_or_default();
    flow.total_deposited = flow.total_deposited.checked_add(amount).map_err(StdError::from)?;
    FLOWS.save(deps.storage, &token, &flow)?;

    let pull = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: payer.to_string(),
            recipient: pool.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("method", "deposit")
        .add_attribute("bridge", info.sender)
        .add_attribute("payer", payer)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}

/// Push tokens out of custody to the recipient.
fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.as_ref(), &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let token = deps.api.addr_validate(&token)?;

    let held = cw20_balance(deps.as_ref(), &token, &env.contract.address)?;
    if held < amount {
        return Err(ContractError::InsufficientPoolBalance {
            token: token.to_string(),
            available: held,
            required: amount,
        });
    }

    let mut flow = FLOWS.may_load(deps.storage, &token)?.unwrap_or_default();
    flow.total_released = flow.total_released.checked_add(amount).map_err(StdError::from)?;
    FLOWS.save(deps.storage, &token, &flow)?;

    let push = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(push)
        .add_attribute("method", "release")
        .add_attribute("bridge", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}

fn execute_grant_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let bridge = deps.api.addr_validate(&address)?;
    BRIDGES.save(deps.storage, &bridge, &true)?;

    Ok(Response::new()
        .add_attribute("method", "grant_bridge")
        .add_attribute("bridge", bridge))
}

fn execute_revoke_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if info.sender != admin {
        return Err(ContractError::Unauthorized);
    }

    let bridge = deps.api.addr_validate(&address)?;
    BRIDGES.remove(deps.storage, &bridge);

    Ok(Response::new()
        .add_attribute("method", "revoke_bridge")
        .add_attribute("bridge", bridge))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&ConfigResponse {
            admin: ADMIN.load(deps.storage)?,
        }),
        QueryMsg::IsBridge { address } => {
            let addr = deps.api.addr_validate(&address)?;
            let is_bridge = BRIDGES.may_load(deps.storage, &addr)?.unwrap_or(false);
            to_json_binary(&IsBridgeResponse { is_bridge })
        }
        QueryMsg::Bridges {} => to_json_binary(&query_bridges(deps)?),
        QueryMsg::Balance { token } => to_json_binary(&query_balance(deps, env, token)?),
    }
}

fn query_bridges(deps: Deps) -> StdResult<BridgesResponse> {
    let bridges = BRIDGES
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((addr, true)) => Some(Ok(addr)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(BridgesResponse { bridges })
}

fn query_balance(deps: Deps, env: Env, token: String) -> StdResult<PoolBalanceResponse> {
    let token = deps.api.addr_validate(&token)?;
    let balance = cw20_balance(deps, &token, &env.contract.address)?;
    let flow = FLOWS.may_load(deps.storage, &token)?.unwrap_or_default();
    Ok(PoolBalanceResponse {
        token,
        balance,
        total_deposited: flow.total_deposited,
        total_released: flow.total_released,
    })
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
