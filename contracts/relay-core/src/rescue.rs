use soroban_sdk::{token, Address, Env};

use crate::events;

/// Sends `amount` of `token` held by this contract to `to`. Balance checks are
/// left to the token itself.
pub fn rescue_token(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    events::token_rescued(env, token, to, amount);
}
