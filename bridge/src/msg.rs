//! Message types for the Pontoon bridge contract

use common::{Signature, SwapState};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128, Uint256};

use crate::auth::SignerPolicy;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Pool contract for this chain; it must grant this bridge the BRIDGE capability
    pub pool: String,
    /// Who must sign swap requests (usually `Sender {}`)
    pub swap_policy: SignerPolicy,
    /// Who must sign redeem requests (usually `Authority { signer }`)
    pub redeem_policy: SignerPolicy,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Swap / Redeem
    // ========================================================================
    /// Lock `amount` of `symbol_from` in the pool and request `symbol_to` on
    /// the destination chain.
    ///
    /// Authorization: signature over `transaction_number ++ amount ++ symbol_to`
    /// matching the swap signer policy. The caller must have approved the pool
    /// as CW20 spender.
    Swap {
        transaction_number: Uint128,
        amount: Uint256,
        symbol_to: String,
        symbol_from: String,
        signature: Signature,
    },

    /// Release `amount` of `symbol` from the pool to the caller.
    ///
    /// Authorization: signature over `transaction_number ++ amount ++ symbol`
    /// matching the redeem signer policy. Each message pays out once.
    Redeem {
        transaction_number: Uint128,
        amount: Uint256,
        symbol: String,
        signature: Signature,
    },

    // ========================================================================
    // Registry & Wiring
    // ========================================================================
    /// Register a CW20 token under a symbol. Symbols cannot be re-pointed.
    ///
    /// Authorization: Admin only
    AddCoin { token: String, symbol: String },

    /// Authorization: Admin only
    SetPool { pool: String },

    /// Replace either signer policy; `None` leaves it unchanged.
    ///
    /// Authorization: Admin only
    SetSignerPolicy {
        swap_policy: Option<SignerPolicy>,
        redeem_policy: Option<SignerPolicy>,
    },

    // ========================================================================
    // Admin
    // ========================================================================
    /// Halt swap and redeem (admin only)
    Pause {},

    /// Resume swap and redeem (admin only)
    Unpause {},

    /// Propose a new admin; acceptable after the 7 day timelock
    ProposeAdmin { new_admin: String },

    /// Accept the admin role (pending admin only)
    AcceptAdmin {},

    /// Drop the pending proposal (admin only)
    CancelAdminProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Token address registered for a symbol; errors on unknown symbols
    #[returns(CoinResponse)]
    CoinAddressBySymbol { symbol: String },

    #[returns(CoinsResponse)]
    Coins {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Ledger state for a raw message key
    #[returns(SwapStateResponse)]
    SwapState { message: String },

    /// Canonical key and signing digest for a request, as relayers must build it
    #[returns(MessageKeyResponse)]
    MessageKey {
        transaction_number: Uint128,
        amount: Uint256,
        symbol: String,
    },

    #[returns(StatsResponse)]
    Stats {},

    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub pool: Addr,
    pub paused: bool,
    pub swap_policy: SignerPolicy,
    pub redeem_policy: SignerPolicy,
}

#[cw_serde]
pub struct CoinResponse {
    pub symbol: String,
    pub token: Addr,
}

#[cw_serde]
pub struct CoinsResponse {
    pub coins: Vec<CoinResponse>,
}

#[cw_serde]
pub struct SwapStateResponse {
    pub message: String,
    pub state: SwapState,
    /// 0 = unset, 1 = swapped, 2 = redeemed
    pub ordinal: u8,
}

#[cw_serde]
pub struct MessageKeyResponse {
    pub message: String,
    /// EIP-191 digest the signer must sign (32 bytes)
    pub digest: Binary,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_swaps: u64,
    pub total_redeems: u64,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}
