use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<RoundState> = Item::new("round");
/// Next randomness request id handed to the coordinator. Starts at 1 so that
/// id 0 never appears on the wire.
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");

#[cw_serde]
pub struct Config {
    /// VRF coordinator contract. The only sender allowed to fulfill.
    pub coordinator: Addr,
    /// Fixed price of one entry, in `fee_denom`.
    pub entry_fee: Uint128,
    pub fee_denom: String,
    /// Minimum seconds a round stays open before upkeep may close it.
    pub round_interval_seconds: u64,
}

#[cw_serde]
pub enum RoundStatus {
    Open,
    AwaitingRandomness,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Open => "open",
            RoundStatus::AwaitingRandomness => "awaiting_randomness",
        }
    }
}

/// The single active round. Players and pool are frozen from the moment the
/// round closes until the coordinator's callback resolves it.
#[cw_serde]
pub struct RoundState {
    pub status: RoundStatus,
    /// Insertion order kept; the same address may appear multiple times and
    /// weighs accordingly in the winner draw.
    pub players: Vec<Addr>,
    pub pool: Uint128,
    /// When the current round opened (instantiation or last payout).
    pub last_close_time: Timestamp,
    /// Set iff `status == AwaitingRandomness`.
    pub pending_request_id: Option<u64>,
    /// Winner of the most recent completed round. Query-only.
    pub recent_winner: Option<Addr>,
}

impl RoundState {
    /// The upkeep predicate: open, interval elapsed, at least one player,
    /// non-empty pool. Pure; both the query and `perform_upkeep` evaluate it
    /// against live state.
    pub fn upkeep_needed(&self, config: &Config, now: Timestamp) -> bool {
        self.status == RoundStatus::Open
            && now.seconds() >= self.last_close_time.seconds() + config.round_interval_seconds
            && !self.players.is_empty()
            && !self.pool.is_zero()
    }
}
