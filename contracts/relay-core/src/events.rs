use soroban_sdk::{Address, Env, Symbol};

pub fn initialized(env: &Env, owner: &Address) {
    env.events()
        .publish((Symbol::new(env, "initialized"),), owner.clone());
}

pub fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (
            Symbol::new(env, "ownership_transferred"),
            previous_owner.clone(),
            new_owner.clone(),
        ),
        (),
    );
}

pub fn admin_updated(env: &Env, account: &Address, status: bool) {
    env.events()
        .publish((Symbol::new(env, "admin_updated"), account.clone()), status);
}

pub fn paused(env: &Env, caller: &Address) {
    env.events()
        .publish((Symbol::new(env, "paused"),), caller.clone());
}

pub fn unpaused(env: &Env, caller: &Address) {
    env.events()
        .publish((Symbol::new(env, "unpaused"),), caller.clone());
}

pub fn payer_updated(env: &Env, payer: &Address) {
    env.events()
        .publish((Symbol::new(env, "payer_updated"),), payer.clone());
}

pub fn market_entered(env: &Env, market: &Address) {
    env.events()
        .publish((Symbol::new(env, "market_entered"), market.clone()), ());
}

/// Carries the resolved amount, never the full-balance sentinel.
pub fn repay_borrow_behalf(env: &Env, market: &Address, borrower: &Address, amount: u128) {
    env.events().publish(
        (
            Symbol::new(env, "repay_borrow_behalf"),
            market.clone(),
            borrower.clone(),
        ),
        amount,
    );
}

pub fn default_repayment(env: &Env, market: &Address, borrower: &Address, burned: u128) {
    env.events().publish(
        (
            Symbol::new(env, "default_repayment"),
            market.clone(),
            borrower.clone(),
        ),
        burned,
    );
}

pub fn mint_on_debt_collection(env: &Env, borrower: &Address, amount: u128) {
    env.events().publish(
        (Symbol::new(env, "mint_on_debt_collection"), borrower.clone()),
        amount,
    );
}

pub fn cap_updated(env: &Env, cap: u128) {
    env.events()
        .publish((Symbol::new(env, "cap_updated"),), cap);
}

pub fn token_rescued(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "token_rescued"), token.clone(), to.clone()),
        amount,
    );
}
