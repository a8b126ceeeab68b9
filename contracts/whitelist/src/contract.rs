use crate::state::{Config, ReaddPolicy, CONFIG, TOTAL_QUOTA, WHITELIST};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use drop_minter_api::{ConfigResponse as MinterConfigResponse, MinterQueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:whitelist-quota";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    mut msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = Config {
        admin: info.sender,
        default_quota: msg.default_quota,
        readd_policy: msg.readd_policy.unwrap_or(ReaddPolicy::Reject),
        minter_contract: None,
    };

    // remove duplicate addresses
    msg.addresses.sort_unstable();
    msg.addresses.dedup();

    let mut total_quota = 0u64;
    for address in msg.addresses.into_iter() {
        let addr = deps.api.addr_validate(&address)?;
        WHITELIST.save(deps.storage, addr, &msg.default_quota)?;
        total_quota += msg.default_quota;
    }

    TOTAL_QUOTA.save(deps.storage, &total_quota)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateAdmin { new_admin } => execute_update_admin(deps, info, new_admin),
        ExecuteMsg::AddAddresses { addresses } => execute_add_addresses(deps, info, addresses),
        ExecuteMsg::RemoveAddresses { addresses } => {
            execute_remove_addresses(deps, info, addresses)
        }
        ExecuteMsg::Consume { address, amount } => execute_consume(deps, info, address, amount),
        ExecuteMsg::UpdateDefaultQuota { quota } => execute_update_default_quota(deps, info, quota),
        ExecuteMsg::UpdateMinterContract { minter_contract } => {
            execute_update_minter_contract(deps, info, minter_contract)
        }
    }
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    config.admin = deps.api.addr_validate(&new_admin)?;
    CONFIG.save(deps.storage, &config)?;
    let event = Event::new("update_admin")
        .add_attribute("new_admin", config.admin)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_add_addresses(
    deps: DepsMut,
    info: MessageInfo,
    mut addresses: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut total_quota = TOTAL_QUOTA.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    // dedupe so one call can never credit an address twice
    addresses.sort_unstable();
    addresses.dedup();

    for address in addresses.into_iter() {
        let addr = deps.api.addr_validate(&address)?;
        match WHITELIST.may_load(deps.storage, addr.clone())? {
            None => {
                WHITELIST.save(deps.storage, addr, &config.default_quota)?;
                total_quota += config.default_quota;
            }
            Some(remaining) => match config.readd_policy {
                ReaddPolicy::Reject => {
                    return Err(ContractError::AddressAlreadyExists {
                        addr: addr.to_string(),
                    })
                }
                ReaddPolicy::Reset => {
                    WHITELIST.save(deps.storage, addr, &config.default_quota)?;
                    total_quota = total_quota - remaining + config.default_quota;
                }
                ReaddPolicy::TopUp => {
                    WHITELIST.save(deps.storage, addr, &(remaining + config.default_quota))?;
                    total_quota += config.default_quota;
                }
            },
        }
    }

    TOTAL_QUOTA.save(deps.storage, &total_quota)?;

    let event = Event::new("add_addresses")
        .add_attribute("total_quota", total_quota.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_remove_addresses(
    deps: DepsMut,
    info: MessageInfo,
    mut addresses: Vec<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut total_quota = TOTAL_QUOTA.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    // dedupe
    addresses.sort_unstable();
    addresses.dedup();

    for address in addresses.into_iter() {
        let addr = deps.api.addr_validate(&address)?;
        match WHITELIST.may_load(deps.storage, addr.clone())? {
            Some(remaining) => {
                WHITELIST.remove(deps.storage, addr);
                total_quota -= remaining;
            }
            None => {
                return Err(ContractError::AddressNotFound {
                    addr: addr.to_string(),
                })
            }
        }
    }

    TOTAL_QUOTA.save(deps.storage, &total_quota)?;
    let event = Event::new("remove_addresses")
        .add_attribute("total_quota", total_quota.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_consume(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    amount: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if let Some(minter_contract) = config.minter_contract {
        if minter_contract != info.sender {
            return Err(ContractError::Unauthorized {});
        }
    } else {
        return Err(ContractError::Unauthorized {});
    }

    if amount == 0 {
        return Err(ContractError::ZeroAmount {});
    }

    // an unlisted address has a remaining quota of 0
    let addr = deps.api.addr_validate(&address)?;
    let remaining = WHITELIST.may_load(deps.storage, addr.clone())?.unwrap_or_default();
    if amount > remaining {
        return Err(ContractError::QuotaExceeded {});
    }

    WHITELIST.save(deps.storage, addr, &(remaining - amount))?;
    let total_quota = TOTAL_QUOTA.load(deps.storage)? - amount;
    TOTAL_QUOTA.save(deps.storage, &total_quota)?;

    let event = Event::new("consume")
        .add_attribute("address", address)
        .add_attribute("amount", amount.to_string())
        .add_attribute("remaining", (remaining - amount).to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_update_default_quota(
    deps: DepsMut,
    info: MessageInfo,
    quota: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    // applies to future adds only; existing entries keep their quota
    config.default_quota = quota;
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("update_default_quota")
        .add_attribute("new_quota", quota.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_update_minter_contract(
    deps: DepsMut,
    info: MessageInfo,
    minter_contract: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let minter_addr = deps.api.addr_validate(&minter_contract)?;
    // Make sure the address is the drop minter contract
    // This will fail if the sender cannot parse a response from the minter contract
    let _: MinterConfigResponse = deps
        .querier
        .query_wasm_smart(minter_addr.clone(), &MinterQueryMsg::Config {})?;

    config.minter_contract = Some(minter_addr);
    CONFIG.save(deps.storage, &config)?;
    let event =
        Event::new("update_minter_contract").add_attribute("minter_contract", minter_contract);
    Ok(Response::default().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::IncludesAddress { address } => to_binary(&query_includes_address(deps, address)?),
        QueryMsg::RemainingQuota { address } => to_binary(&query_remaining_quota(deps, address)?),
        QueryMsg::TotalQuota {} => to_binary(&query_total_quota(deps)?),
        QueryMsg::DefaultQuota {} => to_binary(&query_default_quota(deps)?),
        QueryMsg::Admin {} => to_binary(&query_admin(deps)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse { config })
}

pub fn query_includes_address(deps: Deps, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(WHITELIST.has(deps.storage, addr))
}

pub fn query_remaining_quota(deps: Deps, address: String) -> StdResult<u64> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(WHITELIST.may_load(deps.storage, addr)?.unwrap_or_default())
}

pub fn query_total_quota(deps: Deps) -> StdResult<u64> {
    TOTAL_QUOTA.load(deps.storage)
}

pub fn query_default_quota(deps: Deps) -> StdResult<u64> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.default_quota)
}

pub fn query_admin(deps: Deps) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.admin.to_string())
}
