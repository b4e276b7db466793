//! Storage layout for the Pontoon pool contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:pontoon-pool";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cumulative movements through the pool for one token
#[cw_serde]
#[derive(Default)]
pub struct TokenFlow {
    pub total_deposited: Uint128,
    pub total_released: Uint128,
}

pub const ADMIN: Item<Addr> = Item::new("admin");

/// Contracts holding the BRIDGE capability
pub const BRIDGES: Map<&Addr, bool> = Map::new("bridges");

/// token address => cumulative flow
pub const FLOWS: Map<&Addr, TokenFlow> = Map::new("flows");
