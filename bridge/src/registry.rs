//! Token registry: symbol => CW20 token address.
//!
//! Entries are write-once. Re-pointing a symbol would silently change what a
//! still-unredeemed message key pays out, so `add_coin` refuses overwrites.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::COINS;

pub const MAX_SYMBOL_LEN: usize = 32;

/// Symbols end up verbatim in the message key and in event attributes.
pub fn validate_symbol(symbol: &str) -> Result<(), ContractError> {
    let invalid = |reason: &str| ContractError::InvalidSymbol {
        symbol: symbol.to_string(),
        reason: reason.to_string(),
    };

    if symbol.is_empty() {
        return Err(invalid("empty"));
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(invalid("longer than 32 bytes"));
    }
    if !symbol.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(invalid("only printable ASCII without spaces is allowed"));
    }
    Ok(())
}

pub fn add_coin(storage: &mut dyn Storage, token: &Addr, symbol: &str) -> Result<(), ContractError> {
    validate_symbol(symbol)?;
    if COINS.has(storage, symbol) {
        return Err(ContractError::DuplicateSymbol {
            symbol: symbol.to_string(),
        });
    }
    COINS.save(storage, symbol, token)?;
    Ok(())
}

pub fn get_handle(storage: &dyn Storage, symbol: &str) -> Result<Addr, ContractError> {
    COINS
        .may_load(storage, symbol)?
        .ok_or_else(|| ContractError::UnknownSymbol {
            symbol: symbol.to_string(),
        })
}
