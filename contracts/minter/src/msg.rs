use cosmwasm_schema::cw_serde;
use drop_minter_api::Phase;

pub use drop_minter_api::ConfigResponse;
pub type QueryMsg = drop_minter_api::MinterQueryMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the cw721-base contract used for the collection
    pub collection_code_id: u64,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    /// Minted to the admin right after the collection is instantiated
    pub premint_count: u64,
    pub max_mint_amount: u64,
    pub base_uri: String,
    pub base_extension: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Public-phase mint, open to anyone, capped per call
    Mint { amount: u64 },
    /// Whitelist-phase mint, paid for out of the caller's quota
    WhitelistMint { amount: u64 },
    SetPhase { phase: Phase },
    UpdateAdmin { new_admin: String },
    UpdateWhitelist { whitelist: String },
    UpdateMaxMintAmount { amount: u64 },
    UpdateBaseUri { base_uri: String },
    UpdateBaseExtension { base_extension: String },
}
