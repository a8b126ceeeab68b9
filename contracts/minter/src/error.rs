use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("WrongPhase")]
    WrongPhase {},

    #[error("InvalidMintAmount")]
    InvalidMintAmount {},

    #[error("OverMaxMintAmount")]
    OverMaxMintAmount {},

    #[error("MaxSupplyExceeded")]
    MaxSupplyExceeded {},

    #[error("QuotaExceeded")]
    QuotaExceeded {},

    #[error("WhitelistNotSet")]
    WhitelistNotSet {},

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}
