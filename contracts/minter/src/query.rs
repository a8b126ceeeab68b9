#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, StdResult};

use crate::{
    msg::{ConfigResponse, QueryMsg},
    state::{COLLECTION, CONFIG, PHASE, TOTAL_ISSUED, WHITELIST},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Phase {} => to_binary(&PHASE.load(deps.storage)?),
        QueryMsg::TotalIssued {} => to_binary(&TOTAL_ISSUED.load(deps.storage)?),
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::Admin {} => to_binary(&query_admin(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let collection = COLLECTION.may_load(deps.storage)?;
    let whitelist = WHITELIST.may_load(deps.storage)?;

    Ok(ConfigResponse {
        admin: config.admin.to_string(),
        collection: collection.map(|c| c.to_string()),
        whitelist: whitelist.map(|w| w.addr().to_string()),
        max_supply: config.max_supply,
        max_mint_amount: config.max_mint_amount,
        premint_count: config.premint_count,
        base_uri: config.base_uri,
        base_extension: config.base_extension,
    })
}

/// Composed from the current prefix and suffix on every read, so updating
/// either re-points all tokens at once
fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    Ok(format!(
        "{}{}{}",
        config.base_uri, token_id, config.base_extension
    ))
}

fn query_admin(deps: Deps) -> StdResult<String> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.admin.to_string())
}
