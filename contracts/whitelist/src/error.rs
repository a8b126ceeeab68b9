use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("AddressAlreadyExists {addr}")]
    AddressAlreadyExists { addr: String },

    #[error("AddressNotFound {addr}")]
    AddressNotFound { addr: String },

    #[error("QuotaExceeded")]
    QuotaExceeded {},

    #[error("ZeroAmount")]
    ZeroAmount {},
}
