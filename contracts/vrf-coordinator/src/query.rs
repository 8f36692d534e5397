use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::state::{PendingRequest, CONFIG, PENDING_REQUESTS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pending_request(
    deps: Deps,
    consumer: String,
    request_id: u64,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&consumer)?;
    let request = PENDING_REQUESTS.may_load(deps.storage, (&addr, request_id))?;
    to_json_binary(&request)
}

pub fn query_pending_requests(
    deps: Deps,
    consumer: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&consumer)?;
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let requests: Vec<PendingRequest> = PENDING_REQUESTS
        .prefix(&addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, request)| request)
        .collect();

    to_json_binary(&requests)
}
