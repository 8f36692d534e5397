use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{Config, RoundState, RoundStatus};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the VRF coordinator contract.
    pub coordinator: String,
    pub entry_fee: Uint128,
    pub fee_denom: String,
    pub round_interval_seconds: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the current round. Send at least `entry_fee` of `fee_denom`.
    Enter {},
    /// Close the round and request randomness if the upkeep predicate holds.
    /// Anyone may call; the predicate is recomputed from live state.
    PerformUpkeep {},
    /// Randomness callback. Coordinator only; wire-compatible with
    /// `raffle_common::ConsumerExecuteMsg`.
    FulfillRandomness {
        request_id: u64,
        random_value: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(RoundState)]
    Round {},

    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {},

    #[returns(Option<Addr>)]
    Player { index: u32 },

    #[returns(Option<Addr>)]
    RecentWinner {},
}

/// Result of the upkeep predicate plus the diagnostics that explain it.
/// `perform_upkeep` reports the same diagnostics when it rejects.
#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    pub status: RoundStatus,
    pub players: u32,
    pub pool: Uint128,
}
