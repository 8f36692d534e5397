use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
/// Outstanding requests keyed by (consumer, request id). The consumer picks
/// the id, so correlation is scoped per consumer contract.
pub const PENDING_REQUESTS: Map<(&Addr, u64), PendingRequest> = Map::new("pending_reqs");

#[cw_serde]
pub struct CoordinatorConfig {
    pub admin: Addr,
    /// Addresses allowed to submit seeds for fulfillment.
    pub operators: Vec<Addr>,
}

#[cw_serde]
pub struct PendingRequest {
    pub consumer: Addr,
    pub request_id: u64,
    pub requested_at: Timestamp,
}
