use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use raffle_common::{derive_random_value, ConsumerExecuteMsg};

use crate::error::ContractError;
use crate::state::{PendingRequest, CONFIG, PENDING_REQUESTS};

/// Register a randomness request. Any contract can call; the sender becomes
/// the consumer that receives the callback.
pub fn request_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
) -> Result<Response, ContractError> {
    let consumer = info.sender;

    if PENDING_REQUESTS.has(deps.storage, (&consumer, request_id)) {
        return Err(ContractError::RequestPending {
            consumer: consumer.to_string(),
            request_id,
        });
    }

    let request = PendingRequest {
        consumer: consumer.clone(),
        request_id,
        requested_at: env.block.time,
    };
    PENDING_REQUESTS.save(deps.storage, (&consumer, request_id), &request)?;

    Ok(Response::new()
        .add_attribute("action", "request_randomness")
        .add_attribute("consumer", consumer.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("vrf_randomness_requested")
                .add_attribute("consumer", consumer.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Fulfill a pending request. Only operators can call. The random value is
/// derived from the submitted seed and the request id, the pending entry is
/// consumed, and the callback goes out to the consumer in the same message.
pub fn submit_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    consumer: String,
    request_id: u64,
    seed_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can submit randomness".to_string(),
        });
    }

    let consumer_addr = deps.api.addr_validate(&consumer)?;
    if !PENDING_REQUESTS.has(deps.storage, (&consumer_addr, request_id)) {
        return Err(ContractError::RequestNotFound {
            consumer,
            request_id,
        });
    }

    let seed = hex::decode(&seed_hex).map_err(|_| ContractError::InvalidHex {
        field: "seed_hex".to_string(),
    })?;
    let random_value = Uint128::new(derive_random_value(&seed, request_id));

    // Consume the request before dispatching so a replayed submission fails
    PENDING_REQUESTS.remove(deps.storage, (&consumer_addr, request_id));

    let callback_msg = WasmMsg::Execute {
        contract_addr: consumer_addr.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::FulfillRandomness {
            request_id,
            random_value,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback_msg)
        .add_attribute("action", "submit_randomness")
        .add_attribute("consumer", consumer_addr.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("vrf_randomness_fulfilled")
                .add_attribute("consumer", consumer_addr.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("random_value", random_value.to_string())
                .add_attribute("submitted_by", info.sender.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| a != addr);
    }

    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(",")))
}
