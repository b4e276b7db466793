//! Pontoon Bridge Contract - Signature-Authorized Swap/Redeem Between Chains
//!
//! One instance runs on each chain, wired to that chain's pool contract.
//! Instances never talk to each other; they agree only on the canonical
//! message key (`common::MessageKey`) that both sides rebuild from the
//! request fields.
//!
//! # Swap (source chain)
//! 1. User approves the pool and calls `Swap` with a signature over the key
//! 2. The signature is checked against the swap signer policy
//! 3. The key is marked SWAPPED and the pool pulls the tokens
//! 4. A `swap` event is emitted for the off-chain authority
//!
//! # Redeem (destination chain)
//! 1. User calls `Redeem` with the authority's signature over the same key
//! 2. The signature is checked against the redeem signer policy
//! 3. The key is marked REDEEMED, then the pool pays out
//!
//! # Security
//! - A key releases funds at most once per instance
//! - Ledger state is written before the payout sub-message runs
//! - Emergency pause and timelocked admin transfer

pub mod auth;
pub mod contract;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod registry;
pub mod state;

pub use crate::auth::{Authorizer, SignerPolicy};
pub use crate::error::ContractError;
