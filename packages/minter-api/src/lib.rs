use cosmwasm_schema::{cw_serde, QueryResponses};

/// Release phase of the drop. Set by the admin; any phase may be set from
/// any other, so an earlier phase can be reopened.
#[cw_serde]
pub enum Phase {
    BeforeMint,
    WhitelistMint,
    PublicMint,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum MinterQueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Phase)]
    Phase {},
    /// Number of tokens issued so far, including the deploy-time premint
    #[returns(u64)]
    TotalIssued {},
    /// Metadata uri for a token id: `base_uri + token_id + base_extension`
    #[returns(String)]
    TokenUri { token_id: u64 },
    #[returns(String)]
    Admin {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: String,
    pub collection: Option<String>,
    pub whitelist: Option<String>,
    pub max_supply: u64,
    pub max_mint_amount: u64,
    pub premint_count: u64,
    pub base_uri: String,
    pub base_extension: String,
}
