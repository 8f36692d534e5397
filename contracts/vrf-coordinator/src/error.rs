use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("request {request_id} from {consumer} is already pending")]
    RequestPending { consumer: String, request_id: u64 },

    #[error("no pending request {request_id} for consumer {consumer}")]
    RequestNotFound { consumer: String, request_id: u64 },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },
}
