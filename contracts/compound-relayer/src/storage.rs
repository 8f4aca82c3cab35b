use relay_core::storage::bump_instance_ttl;
use relay_core::{events, RelayError};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum DataKey {
    CompoundPayer,
}

pub fn compound_payer(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::CompoundPayer)
}

/// The payer must differ from the current one and must not be this contract.
pub fn set_compound_payer(env: &Env, payer: &Address) -> Result<(), RelayError> {
    if compound_payer(env).as_ref() == Some(payer) {
        return Err(RelayError::PayerUnchanged);
    }
    if *payer == env.current_contract_address() {
        return Err(RelayError::InvalidPayer);
    }
    env.storage().instance().set(&DataKey::CompoundPayer, payer);
    bump_instance_ttl(env);
    events::payer_updated(env, payer);
    Ok(())
}
