//! State definitions for the Pontoon bridge contract

use common::SwapState;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

use crate::auth::SignerPolicy;

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Pool contract holding this chain's custody balances
    pub pool: Addr,
    /// Whether swap and redeem are halted
    pub paused: bool,
    /// Who must have signed a swap request
    pub swap_policy: SignerPolicy,
    /// Who must have signed a redeem request
    pub redeem_policy: SignerPolicy,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    pub new_address: Addr,
    /// Block time when the change can be accepted
    pub execute_after: Timestamp,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_swaps: u64,
    pub total_redeems: u64,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:pontoon-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

pub const STATS: Item<Stats> = Item::new("stats");

/// symbol => CW20 token address
pub const COINS: Map<&str, Addr> = Map::new("coins");

/// message key => ledger state; absence means `Unset`
pub const SWAP_STATES: Map<&str, SwapState> = Map::new("swap_states");
