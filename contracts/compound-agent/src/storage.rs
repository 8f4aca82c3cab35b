use relay_core::repay::MarketBinding;
use relay_core::storage::bump_instance_ttl;
use relay_core::{events, RelayError};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum DataKey {
    Market,
    Underlying,
    MintOnDebtCollectionCap,
}

/// Written once, during initialization.
pub fn bind_market(env: &Env, market: &Address, underlying: &Address) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Market, market);
    instance.set(&DataKey::Underlying, underlying);
    instance.set(&DataKey::MintOnDebtCollectionCap, &0u128);
    bump_instance_ttl(env);
}

pub fn market_binding(env: &Env) -> Result<MarketBinding, RelayError> {
    let instance = env.storage().instance();
    Ok(MarketBinding {
        market: instance
            .get(&DataKey::Market)
            .ok_or(RelayError::NotInitialized)?,
        underlying: instance
            .get(&DataKey::Underlying)
            .ok_or(RelayError::NotInitialized)?,
    })
}

pub fn mint_on_debt_collection_cap(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::MintOnDebtCollectionCap)
        .unwrap_or(0)
}

pub fn set_mint_on_debt_collection_cap(env: &Env, cap: u128) -> Result<(), RelayError> {
    if mint_on_debt_collection_cap(env) == cap {
        return Err(RelayError::CapUnchanged);
    }
    env.storage()
        .instance()
        .set(&DataKey::MintOnDebtCollectionCap, &cap);
    events::cap_updated(env, cap);
    Ok(())
}
