use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Messages a consumer contract sends to the VRF coordinator.
///
/// The consumer picks the `request_id` (a monotonic counter on its side) and
/// the coordinator correlates on `(consumer, request_id)`. CosmWasm messages
/// carry no return value, so the identifier travels with the request instead
/// of being handed back.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomness { request_id: u64 },
}

/// Callback the coordinator delivers to the requesting consumer once an
/// operator has submitted the seed for the request.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    FulfillRandomness {
        request_id: u64,
        random_value: Uint128,
    },
}
