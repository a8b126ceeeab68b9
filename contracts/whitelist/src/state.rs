use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// What `AddAddresses` does with an address that is already listed.
#[cw_serde]
pub enum ReaddPolicy {
    /// Fail the whole call with `AddressAlreadyExists`
    Reject,
    /// Overwrite the entry with the current default quota
    Reset,
    /// Add the current default quota to the entry
    TopUp,
}

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Quota assigned to an address when it is added to the list
    pub default_quota: u64,
    pub readd_policy: ReaddPolicy,
    pub minter_contract: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");
// Sum of all remaining quotas, kept in step with the map below
pub const TOTAL_QUOTA: Item<u64> = Item::new("total_quota");
// Holds all addresses and their remaining quota
pub const WHITELIST: Map<Addr, u64> = Map::new("wl");
