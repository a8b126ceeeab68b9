use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use drop_minter_api::Phase;
use whitelist_quota::helpers::WhitelistQuotaContract;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Immutable: no execute message touches it
    pub max_supply: u64,
    /// Public-phase cap on a single mint call
    pub max_mint_amount: u64,
    /// Tokens minted to the admin at deployment
    pub premint_count: u64,
    pub base_uri: String,
    pub base_extension: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const PHASE: Item<Phase> = Item::new("phase");

/// Issued-token counter and token id cursor: ids 1..=TOTAL_ISSUED exist
pub const TOTAL_ISSUED: Item<u64> = Item::new("total_issued");

pub const COLLECTION: Item<Addr> = Item::new("collection");

/// Can only be updated by admin
pub const WHITELIST: Item<WhitelistQuotaContract> = Item::new("whitelist");
