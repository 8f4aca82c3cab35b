#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

#[contracttype]
enum DataKey {
    Failure,
    Entered(Address),
}

/// Comptroller for tests. Answers `enter_markets` with one code per market and
/// remembers which markets each account entered.
#[contract]
pub struct MockComptroller;

#[contractimpl]
impl MockComptroller {
    /// Every subsequent entry reports `code`; zero restores success.
    pub fn set_failure(env: Env, code: u32) {
        env.storage().persistent().set(&DataKey::Failure, &code);
    }

    pub fn enter_markets(env: Env, account: Address, markets: Vec<Address>) -> Vec<u32> {
        account.require_auth();
        let failure: u32 = env
            .storage()
            .persistent()
            .get(&DataKey::Failure)
            .unwrap_or(0);
        let mut entered = Self::markets_of(env.clone(), account.clone());
        let mut codes = Vec::new(&env);
        for market in markets.iter() {
            if failure == 0 && !entered.contains(&market) {
                entered.push_back(market);
            }
            codes.push_back(failure);
        }
        env.storage()
            .persistent()
            .set(&DataKey::Entered(account), &entered);
        codes
    }

    pub fn markets_of(env: Env, account: Address) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Entered(account))
            .unwrap_or(Vec::new(&env))
    }
}
