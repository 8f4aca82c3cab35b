#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};
use stellar_tokens::fungible::Base as TokenBase;

#[contracttype]
enum DataKey {
    MintRefused,
}

/// Underlying token for tests. Balances and allowances come from the fungible
/// base; `mint` reports refusal with `false` instead of panicking.
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) -> bool {
        if amount < 0 {
            panic!("bad amount");
        }
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::MintRefused)
            .unwrap_or(false)
        {
            return false;
        }
        TokenBase::mint(&env, &to, amount);
        true
    }

    pub fn set_mint_refused(env: Env, refused: bool) {
        env.storage()
            .persistent()
            .set(&DataKey::MintRefused, &refused);
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        TokenBase::allowance(&env, &from, &spender)
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        if amount < 0 {
            panic!("bad amount");
        }
        TokenBase::approve(&env, &from, &spender, amount, expiration_ledger);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        if amount < 0 {
            panic!("bad amount");
        }
        TokenBase::transfer(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        if amount < 0 {
            panic!("bad amount");
        }
        TokenBase::transfer_from(&env, &spender, &from, &to, amount);
    }

    pub fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        if amount < 0 {
            panic!("bad amount");
        }
        if TokenBase::balance(&env, &from) < amount {
            panic!("insufficient balance");
        }
        TokenBase::update(&env, Some(&from), None, amount);
    }
}
