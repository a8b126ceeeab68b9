use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery,
};

use crate::{
    msg::{ConfigResponse, ExecuteMsg, QueryMsg},
    state::Config,
};

/// WhitelistQuotaContract is a wrapper around Addr that provides helpers
/// for the minter contract
#[cw_serde]
pub struct WhitelistQuotaContract(pub Addr);

impl WhitelistQuotaContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn consume(&self, address: &str, amount: u64) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Consume {
            address: address.to_string(),
            amount,
        })
    }

    pub fn includes(&self, querier: &QuerierWrapper, address: String) -> StdResult<bool> {
        let includes: bool = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::IncludesAddress { address })?,
        }))?;
        Ok(includes)
    }

    pub fn remaining_quota(&self, querier: &QuerierWrapper, address: String) -> StdResult<u64> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::RemainingQuota { address })?,
        }))
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<Config> {
        let res: ConfigResponse = querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::Config {})?,
        }))?;

        Ok(res.config)
    }
}
