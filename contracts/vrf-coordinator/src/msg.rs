use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{CoordinatorConfig, PendingRequest};

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a randomness request. The sender is recorded as the consumer
    /// and receives the eventual callback. Wire-compatible with
    /// `raffle_common::CoordinatorExecuteMsg`.
    RequestRandomness { request_id: u64 },
    /// Fulfill a pending request from an operator-submitted seed. The random
    /// value is derived from the seed and delivered to the consumer.
    SubmitRandomness {
        consumer: String,
        request_id: u64,
        /// Hex-encoded seed bytes.
        seed_hex: String,
    },
    /// Update the operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinatorConfig)]
    Config {},

    #[returns(Option<PendingRequest>)]
    PendingRequest { consumer: String, request_id: u64 },

    #[returns(Vec<PendingRequest>)]
    PendingRequests {
        consumer: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}
