use cosmwasm_std::{
    coins, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use raffle_common::CoordinatorExecuteMsg;

use crate::error::ContractError;
use crate::state::{RoundStatus, CONFIG, NEXT_REQUEST_ID, ROUND};

/// Join the current round. The full attached amount of `fee_denom` goes into
/// the pool, so overpaying buys nothing extra but is not refunded.
pub fn enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    if round.status != RoundStatus::Open {
        return Err(ContractError::RoundNotOpen {});
    }

    let sent = info
        .funds
        .iter()
        .find(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .unwrap_or(Uint128::zero());

    if sent < config.entry_fee {
        return Err(ContractError::InsufficientPayment {
            sent,
            required: config.entry_fee,
            denom: config.fee_denom,
        });
    }

    round.players.push(info.sender.clone());
    round.pool += sent;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_event(
            Event::new("raffle_entry")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("amount", sent.to_string())
                .add_attribute("players", round.players.len().to_string())
                .add_attribute("pool", round.pool.to_string()),
        ))
}

/// Close the round and request randomness from the coordinator. Anyone may
/// call; `check_upkeep` and `perform_upkeep` are independent calls with no
/// atomicity between them, so the predicate is recomputed here rather than
/// trusted from a prior read.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    if !round.upkeep_needed(&config, env.block.time) {
        return Err(ContractError::UpkeepNotNeeded {
            status: round.status.as_str().to_string(),
            players: round.players.len() as u32,
            pool: round.pool,
        });
    }

    let request_id = NEXT_REQUEST_ID.load(deps.storage)?;
    NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;

    round.status = RoundStatus::AwaitingRandomness;
    round.pending_request_id = Some(request_id);
    ROUND.save(deps.storage, &round)?;

    let request_msg = WasmMsg::Execute {
        contract_addr: config.coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomness { request_id })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("raffle_round_closed")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("players", round.players.len().to_string())
                .add_attribute("pool", round.pool.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Randomness callback from the coordinator. Pays the whole pool to the
/// drawn player and reopens the round. This is the only transition back to
/// `Open`.
pub fn fulfill_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    if info.sender != config.coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the coordinator can fulfill randomness".to_string(),
        });
    }

    // Correlation check. A stale, duplicate, or forged callback must be
    // rejected rather than double-paid.
    if round.status != RoundStatus::AwaitingRandomness
        || round.pending_request_id != Some(request_id)
    {
        return Err(ContractError::UnknownRequest { request_id });
    }

    // Closing requires at least one player, so the modulus is well-defined.
    let player_count = round.players.len() as u128;
    if player_count == 0 {
        return Err(ContractError::UnknownRequest { request_id });
    }
    let winner_index = (random_value.u128() % player_count) as usize;
    let winner = round.players[winner_index].clone();
    let payout = round.pool;

    // Fail loud and stay locked if the payout cannot be covered. The round
    // is not reset, so the funds stay attributable.
    let available = deps
        .querier
        .query_balance(env.contract.address.clone(), config.fee_denom.clone())?
        .amount;
    if available < payout {
        return Err(ContractError::PayoutFailed {
            required: payout,
            available,
            denom: config.fee_denom,
        });
    }

    round.recent_winner = Some(winner.clone());
    round.players.clear();
    round.pool = Uint128::zero();
    round.last_close_time = env.block.time;
    round.pending_request_id = None;
    round.status = RoundStatus::Open;
    ROUND.save(deps.storage, &round)?;

    let payout_msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(payout.u128(), &config.fee_denom),
    };

    Ok(Response::new()
        .add_message(payout_msg)
        .add_attribute("action", "fulfill_randomness")
        .add_attribute("winner", winner.to_string())
        .add_attribute("payout", payout.to_string())
        .add_event(
            Event::new("raffle_winner_picked")
                .add_attribute("winner", winner.to_string())
                .add_attribute("payout", payout.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("winner_index", winner_index.to_string())
                .add_attribute("random_value", random_value.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}
