use soroban_sdk::{token, Address, Env};

use crate::errors::RelayError;

pub fn to_i128(amount: u128) -> Result<i128, RelayError> {
    i128::try_from(amount).map_err(|_| RelayError::AmountOverflow)
}

/// Approves `spender` for `amount` of `token` held by this contract. Non-zero
/// grants live as long as the ledger allows; zero grants revoke immediately.
pub fn grant_allowance(env: &Env, token: &Address, spender: &Address, amount: i128) {
    let expiration_ledger = if amount == 0 {
        env.ledger().sequence()
    } else {
        env.ledger().max_live_until_ledger()
    };
    token::Client::new(env, token).approve(
        &env.current_contract_address(),
        spender,
        &amount,
        &expiration_ledger,
    );
}
