//! Pontoon Pool Contract - Custody Vault for One Chain's Bridged Tokens
//!
//! The pool holds CW20 balances on behalf of the bridge. It never decides
//! *whether* a transfer is legitimate; it only moves funds when the caller
//! holds the BRIDGE capability.
//!
//! # Deposit (swap side)
//! 1. Holder approves the pool as CW20 spender
//! 2. Bridge calls `Deposit { payer, token, amount }`
//! 3. Pool checks allowance and balance, then pulls via `TransferFrom`
//!
//! # Release (redeem side)
//! 1. Bridge calls `Release { recipient, token, amount }`
//! 2. Pool checks its own balance and pushes via `Transfer`
//!
//! # Capability
//! The BRIDGE capability is the set of contract addresses passed at
//! instantiation, maintained afterwards by the pool admin.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
