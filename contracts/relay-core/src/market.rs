use soroban_sdk::{vec, Address, Env};

use crate::constants::{NO_ERROR, UNLIMITED_ALLOWANCE};
use crate::errors::{ExternalFailure, RelayError};
use crate::events;
use crate::helpers::grant_allowance;
use crate::interfaces::{ComptrollerClient, MarketClient};

pub fn ensure_market_success(env: &Env, function: &str, code: u32) {
    if code != NO_ERROR {
        ExternalFailure::Market(code).abort(env, function);
    }
}

/// Registers `market` with its comptroller for this contract and lets the market
/// pull unlimited underlying from it. Returns the market's underlying token.
pub fn enter_market(env: &Env, market: &Address) -> Result<Address, RelayError> {
    let market_client = MarketClient::new(env, market);
    let comptroller = ComptrollerClient::new(env, &market_client.comptroller());
    let codes = comptroller.enter_markets(
        &env.current_contract_address(),
        &vec![env, market.clone()],
    );
    let code = codes
        .get(0)
        .ok_or(RelayError::MalformedComptrollerResponse)?;
    if code != NO_ERROR {
        ExternalFailure::Comptroller(code).abort(env, "enter_markets");
    }
    let underlying = market_client.underlying();
    grant_allowance(env, &underlying, market, UNLIMITED_ALLOWANCE);
    events::market_entered(env, market);
    Ok(underlying)
}

/// Supplies `amount` of underlying held by this contract to `market`.
pub fn supply(env: &Env, market: &Address, amount: u128) {
    let code = MarketClient::new(env, market).mint(&env.current_contract_address(), &amount);
    ensure_market_success(env, "mint", code);
}

pub fn redeem(env: &Env, market: &Address, redeem_tokens: u128) {
    let code =
        MarketClient::new(env, market).redeem(&env.current_contract_address(), &redeem_tokens);
    ensure_market_success(env, "redeem", code);
}

pub fn redeem_underlying(env: &Env, market: &Address, redeem_amount: u128) {
    let code = MarketClient::new(env, market)
        .redeem_underlying(&env.current_contract_address(), &redeem_amount);
    ensure_market_success(env, "redeem_underlying", code);
}
