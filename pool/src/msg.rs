//! Message types for the Pontoon pool contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin who grants and revokes the BRIDGE capability
    pub admin: String,
    /// Bridge contracts granted the capability from the start
    pub bridges: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pull `amount` of `token` from `payer` into custody.
    ///
    /// Authorization: BRIDGE capability. The payer must have approved the pool
    /// as CW20 spender.
    Deposit {
        payer: String,
        token: String,
        amount: Uint128,
    },

    /// Pay `amount` of `token` out of custody to `recipient`.
    ///
    /// Authorization: BRIDGE capability
    Release {
        recipient: String,
        token: String,
        amount: Uint128,
    },

    /// Authorization: Admin only
    GrantBridge { address: String },

    /// Authorization: Admin only
    RevokeBridge { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(IsBridgeResponse)]
    IsBridge { address: String },

    /// All addresses currently holding the BRIDGE capability
    #[returns(BridgesResponse)]
    Bridges {},

    /// Custody balance and cumulative flow for one token
    #[returns(PoolBalanceResponse)]
    Balance { token: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
}

#[cw_serde]
pub struct IsBridgeResponse {
    pub is_bridge: bool,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<Addr>,
}

#[cw_serde]
pub struct PoolBalanceResponse {
    pub token: Addr,
    pub balance: Uint128,
    pub total_deposited: Uint128,
    pub total_released: Uint128,
}
