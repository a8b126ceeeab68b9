use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{Config, ReaddPolicy};

#[cw_serde]
pub struct InstantiateMsg {
    pub addresses: Vec<String>,
    pub default_quota: u64,
    /// Defaults to `Reject`
    pub readd_policy: Option<ReaddPolicy>,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateAdmin {
        new_admin: String,
    },
    AddAddresses {
        addresses: Vec<String>,
    },
    RemoveAddresses {
        addresses: Vec<String>,
    },
    /// Only callable by the minter contract. Decrements the address's
    /// remaining quota and the aggregate by `amount`.
    Consume {
        address: String,
        amount: u64,
    },
    UpdateDefaultQuota {
        quota: u64,
    },
    UpdateMinterContract {
        minter_contract: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(bool)]
    IncludesAddress { address: String },
    /// Remaining quota for an address, 0 when not listed
    #[returns(u64)]
    RemainingQuota { address: String },
    /// Sum of all remaining quotas
    #[returns(u64)]
    TotalQuota {},
    #[returns(u64)]
    DefaultQuota {},
    #[returns(String)]
    Admin {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
}
