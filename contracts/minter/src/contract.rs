#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, DepsMut, Empty, Env, MessageInfo, Reply, Response, StdResult, Storage, SubMsg,
    WasmMsg,
};
use cw2::set_contract_version;
use cw721_base::{
    ExecuteMsg as Cw721ExecuteMsg, Extension, InstantiateMsg as Cw721InstantiateMsg, MintMsg,
};
use cw_utils::parse_reply_instantiate_data;
use drop_minter_api::Phase;
use whitelist_quota::helpers::WhitelistQuotaContract;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{Config, COLLECTION, CONFIG, PHASE, TOTAL_ISSUED, WHITELIST};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:drop-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.premint_count > msg.max_supply {
        return Err(ContractError::MaxSupplyExceeded {});
    }

    let config = Config {
        admin: info.sender.clone(),
        max_supply: msg.max_supply,
        max_mint_amount: msg.max_mint_amount,
        premint_count: msg.premint_count,
        base_uri: msg.base_uri,
        base_extension: msg.base_extension,
    };
    CONFIG.save(deps.storage, &config)?;
    PHASE.save(deps.storage, &Phase::BeforeMint)?;
    TOTAL_ISSUED.save(deps.storage, &msg.premint_count)?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Cw721InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        })?,
        funds: info.funds,
        admin: None,
        label: "Drop Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_submessage(submsg)
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INIT_COLLECTION_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    let reply = parse_reply_instantiate_data(msg);
    match reply {
        Ok(res) => {
            let collection = deps.api.addr_validate(&res.contract_address)?;
            COLLECTION.save(deps.storage, &collection)?;

            // premint to the admin, token ids start at 1
            let config = CONFIG.load(deps.storage)?;
            let msgs = mint_msgs(&collection, &config.admin, 1, config.premint_count)?;

            Ok(Response::default()
                .add_messages(msgs)
                .add_attribute("action", "init_collection_reply")
                .add_attribute("collection", collection))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { amount } => execute_mint(deps, info, amount),
        ExecuteMsg::WhitelistMint { amount } => execute_whitelist_mint(deps, info, amount),
        ExecuteMsg::SetPhase { phase } => execute_set_phase(deps, info, phase),
        ExecuteMsg::UpdateAdmin { new_admin } => execute_update_admin(deps, info, new_admin),
        ExecuteMsg::UpdateWhitelist { whitelist } => {
            execute_update_whitelist(deps, info, whitelist)
        }
        ExecuteMsg::UpdateMaxMintAmount { amount } => {
            execute_update_max_mint_amount(deps, info, amount)
        }
        ExecuteMsg::UpdateBaseUri { base_uri } => execute_update_base_uri(deps, info, base_uri),
        ExecuteMsg::UpdateBaseExtension { base_extension } => {
            execute_update_base_extension(deps, info, base_extension)
        }
    }
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    amount: u64,
) -> Result<Response, ContractError> {
    if PHASE.load(deps.storage)? != Phase::PublicMint {
        return Err(ContractError::WrongPhase {});
    }
    if amount == 0 {
        return Err(ContractError::InvalidMintAmount {});
    }

    let config = CONFIG.load(deps.storage)?;
    if amount > config.max_mint_amount {
        return Err(ContractError::OverMaxMintAmount {});
    }

    let first_token_id = reserve_supply(deps.storage, config.max_supply, amount)?;

    let collection = COLLECTION.load(deps.storage)?;
    let msgs = mint_msgs(&collection, &info.sender, first_token_id, amount)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_whitelist_mint(
    deps: DepsMut,
    info: MessageInfo,
    amount: u64,
) -> Result<Response, ContractError> {
    if PHASE.load(deps.storage)? != Phase::WhitelistMint {
        return Err(ContractError::WrongPhase {});
    }
    if amount == 0 {
        return Err(ContractError::InvalidMintAmount {});
    }

    let whitelist = WHITELIST
        .may_load(deps.storage)?
        .ok_or(ContractError::WhitelistNotSet {})?;

    // fail fast; the Consume message below is the authoritative decrement
    // and unwinds the whole call if the ledger disagrees
    let remaining = whitelist.remaining_quota(&deps.querier, info.sender.to_string())?;
    if amount > remaining {
        return Err(ContractError::QuotaExceeded {});
    }

    let config = CONFIG.load(deps.storage)?;
    let first_token_id = reserve_supply(deps.storage, config.max_supply, amount)?;

    let collection = COLLECTION.load(deps.storage)?;
    let consume_msg = whitelist.consume(info.sender.as_str(), amount)?;
    let msgs = mint_msgs(&collection, &info.sender, first_token_id, amount)?;

    Ok(Response::new()
        .add_message(consume_msg)
        .add_messages(msgs)
        .add_attribute("action", "whitelist_mint")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount.to_string()))
}

/// Check the supply cap and advance the counter in one step. Returns the
/// first token id of the reserved range.
fn reserve_supply(
    storage: &mut dyn Storage,
    max_supply: u64,
    amount: u64,
) -> Result<u64, ContractError> {
    let total_issued = TOTAL_ISSUED.load(storage)?;
    if amount > max_supply - total_issued {
        return Err(ContractError::MaxSupplyExceeded {});
    }
    TOTAL_ISSUED.save(storage, &(total_issued + amount))?;
    Ok(total_issued + 1)
}

fn mint_msgs(
    collection: &Addr,
    recipient: &Addr,
    first_token_id: u64,
    amount: u64,
) -> StdResult<Vec<WasmMsg>> {
    (first_token_id..first_token_id + amount)
        .map(|token_id| {
            let mint_msg: Cw721ExecuteMsg<Extension, Empty> =
                Cw721ExecuteMsg::Mint(MintMsg {
                    token_id: token_id.to_string(),
                    owner: recipient.to_string(),
                    token_uri: None,
                    extension: None,
                });
            Ok(WasmMsg::Execute {
                contract_addr: collection.to_string(),
                msg: to_binary(&mint_msg)?,
                funds: vec![],
            })
        })
        .collect()
}

fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if &config.admin != sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn execute_set_phase(
    deps: DepsMut,
    info: MessageInfo,
    phase: Phase,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    PHASE.save(deps.storage, &phase)?;

    Ok(Response::new()
        .add_attribute("action", "set_phase")
        .add_attribute("phase", format!("{:?}", phase)))
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    config.admin = deps.api.addr_validate(&new_admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("new_admin", config.admin))
}

pub fn execute_update_whitelist(
    deps: DepsMut,
    info: MessageInfo,
    whitelist: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    let contract = WhitelistQuotaContract(deps.api.addr_validate(&whitelist)?);
    // This will fail unless the address answers whitelist config queries
    contract.config(&deps.querier)?;
    WHITELIST.save(deps.storage, &contract)?;

    Ok(Response::new()
        .add_attribute("action", "update_whitelist")
        .add_attribute("whitelist", whitelist))
}

pub fn execute_update_max_mint_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    config.max_mint_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_max_mint_amount")
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_update_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    config.base_uri = base_uri;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_base_uri")
        .add_attribute("base_uri", config.base_uri))
}

pub fn execute_update_base_extension(
    deps: DepsMut,
    info: MessageInfo,
    base_extension: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info.sender)?;

    config.base_extension = base_extension;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_base_extension")
        .add_attribute("base_extension", config.base_extension))
}
