use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, RoundState, RoundStatus, CONFIG, NEXT_REQUEST_ID, ROUND};

const CONTRACT_NAME: &str = "crates.io:pooled-raffle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.entry_fee.is_zero() {
        return Err(ContractError::InvalidEntryFee {});
    }
    if msg.round_interval_seconds == 0 {
        return Err(ContractError::InvalidInterval {});
    }

    let config = Config {
        coordinator: deps.api.addr_validate(&msg.coordinator)?,
        entry_fee: msg.entry_fee,
        fee_denom: msg.fee_denom.clone(),
        round_interval_seconds: msg.round_interval_seconds,
    };
    CONFIG.save(deps.storage, &config)?;

    let round = RoundState {
        status: RoundStatus::Open,
        players: vec![],
        pool: Uint128::zero(),
        last_close_time: env.block.time,
        pending_request_id: None,
        recent_winner: None,
    };
    ROUND.save(deps.storage, &round)?;
    NEXT_REQUEST_ID.save(deps.storage, &1u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle")
        .add_attribute("coordinator", config.coordinator.to_string())
        .add_attribute("entry_fee", msg.entry_fee.to_string())
        .add_attribute("fee_denom", msg.fee_denom)
        .add_attribute("round_interval_seconds", msg.round_interval_seconds.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => execute::perform_upkeep(deps, env, info),
        ExecuteMsg::FulfillRandomness {
            request_id,
            random_value,
        } => execute::fulfill_randomness(deps, env, info, request_id, random_value),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Round {} => query::query_round(deps),
        QueryMsg::CheckUpkeep {} => query::query_check_upkeep(deps, env),
        QueryMsg::Player { index } => query::query_player(deps, index),
        QueryMsg::RecentWinner {} => query::query_recent_winner(deps),
    }
}
