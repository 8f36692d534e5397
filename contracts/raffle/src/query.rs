use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdResult};

use crate::msg::CheckUpkeepResponse;
use crate::state::{CONFIG, ROUND};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_round(deps: Deps) -> StdResult<Binary> {
    let round = ROUND.load(deps.storage)?;
    to_json_binary(&round)
}

/// Read-only upkeep predicate, evaluated against the current block time.
/// Never mutates state; callable any number of times.
pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;

    to_json_binary(&CheckUpkeepResponse {
        upkeep_needed: round.upkeep_needed(&config, env.block.time),
        status: round.status,
        players: round.players.len() as u32,
        pool: round.pool,
    })
}

pub fn query_player(deps: Deps, index: u32) -> StdResult<Binary> {
    let round = ROUND.load(deps.storage)?;
    to_json_binary(&round.players.get(index as usize))
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Binary> {
    let round = ROUND.load(deps.storage)?;
    to_json_binary(&round.recent_winner)
}
