use cosmwasm_schema::cw_serde;

/// Ledger state of one message key.
///
/// Transitions only move forward: `Unset -> Swapped -> Redeemed`, or
/// `Unset -> Redeemed` on a destination ledger that never saw the swap.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum SwapState {
    #[default]
    Unset,
    Swapped,
    Redeemed,
}

impl SwapState {
    /// Numeric form used by EVM-side tooling (`getSwapState` returns 0/1/2).
    pub fn ordinal(self) -> u8 {
        match self {
            SwapState::Unset => 0,
            SwapState::Swapped => 1,
            SwapState::Redeemed => 2,
        }
    }
}
