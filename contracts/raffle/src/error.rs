use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("insufficient payment: sent {sent} {denom}, entry fee is {required}")]
    InsufficientPayment {
        sent: Uint128,
        required: Uint128,
        denom: String,
    },

    #[error("round is not open for entries")]
    RoundNotOpen {},

    #[error("upkeep not needed: status {status}, {players} players, pool {pool}")]
    UpkeepNotNeeded {
        status: String,
        players: u32,
        pool: Uint128,
    },

    #[error("no outstanding randomness request matching id {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("payout of {required} {denom} exceeds contract balance {available}")]
    PayoutFailed {
        required: Uint128,
        available: Uint128,
        denom: String,
    },

    #[error("entry fee must be positive")]
    InvalidEntryFee {},

    #[error("round interval must be positive")]
    InvalidInterval {},
}
