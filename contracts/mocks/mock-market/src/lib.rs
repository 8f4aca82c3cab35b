#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

/// Returned when an account redeems more cTokens than it holds.
pub const INSUFFICIENT_CTOKENS: u32 = 9;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarketOp {
    Mint,
    Redeem,
    RedeemUnderlying,
    RepayBorrowBehalf,
    BorrowBalanceCurrent,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCall {
    pub account: Address,
    pub amount: u128,
}

#[contracttype]
enum DataKey {
    Underlying,
    Comptroller,
    BorrowBalance(Address),
    CTokens(Address),
    Failure(MarketOp),
    RepayFailure(Address),
    LastCall(MarketOp),
    CallCount(MarketOp),
    PayoutShortfall,
}

/// Lending market for tests. cTokens exchange 1:1 with the underlying, failure
/// codes are scripted per operation, and the last call of each operation is kept.
#[contract]
pub struct MockMarket;

#[contractimpl]
impl MockMarket {
    pub fn __constructor(env: Env, underlying: Address, comptroller: Address) {
        env.storage()
            .persistent()
            .set(&DataKey::Underlying, &underlying);
        env.storage()
            .persistent()
            .set(&DataKey::Comptroller, &comptroller);
    }

    pub fn set_failure(env: Env, op: MarketOp, code: u32) {
        env.storage().persistent().set(&DataKey::Failure(op), &code);
    }

    pub fn set_repay_failure(env: Env, borrower: Address, code: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::RepayFailure(borrower), &code);
    }

    /// Redemptions report success but deliver `shortfall` less underlying.
    pub fn set_payout_shortfall(env: Env, shortfall: u128) {
        env.storage()
            .persistent()
            .set(&DataKey::PayoutShortfall, &shortfall);
    }

    pub fn set_borrow_balance(env: Env, borrower: Address, amount: u128) {
        env.storage()
            .persistent()
            .set(&DataKey::BorrowBalance(borrower), &amount);
    }

    pub fn set_ctoken_balance(env: Env, account: Address, amount: u128) {
        env.storage()
            .persistent()
            .set(&DataKey::CTokens(account), &amount);
    }

    pub fn ctoken_balance(env: Env, account: Address) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::CTokens(account))
            .unwrap_or(0)
    }

    pub fn borrow_balance_stored(env: Env, borrower: Address) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::BorrowBalance(borrower))
            .unwrap_or(0)
    }

    pub fn last_call(env: Env, op: MarketOp) -> Option<MarketCall> {
        env.storage().persistent().get(&DataKey::LastCall(op))
    }

    pub fn call_count(env: Env, op: MarketOp) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::CallCount(op))
            .unwrap_or(0)
    }

    pub fn underlying(env: Env) -> Address {
        env.storage()
            .persistent()
            .get(&DataKey::Underlying)
            .expect("underlying not set")
    }

    pub fn comptroller(env: Env) -> Address {
        env.storage()
            .persistent()
            .get(&DataKey::Comptroller)
            .expect("comptroller not set")
    }

    pub fn borrow_balance_current(env: Env, account: Address) -> u128 {
        record(&env, MarketOp::BorrowBalanceCurrent, &account, 0);
        Self::borrow_balance_stored(env, account)
    }

    pub fn mint(env: Env, minter: Address, mint_amount: u128) -> u32 {
        minter.require_auth();
        record(&env, MarketOp::Mint, &minter, mint_amount);
        let code = scripted_failure(&env, MarketOp::Mint);
        if code != 0 {
            return code;
        }
        pull_underlying(&env, &minter, mint_amount);
        let held = Self::ctoken_balance(env.clone(), minter.clone());
        Self::set_ctoken_balance(env, minter, held + mint_amount);
        0
    }

    pub fn redeem(env: Env, redeemer: Address, redeem_tokens: u128) -> u32 {
        redeemer.require_auth();
        record(&env, MarketOp::Redeem, &redeemer, redeem_tokens);
        let code = scripted_failure(&env, MarketOp::Redeem);
        if code != 0 {
            return code;
        }
        pay_out(&env, &redeemer, redeem_tokens)
    }

    pub fn redeem_underlying(env: Env, redeemer: Address, redeem_amount: u128) -> u32 {
        redeemer.require_auth();
        record(&env, MarketOp::RedeemUnderlying, &redeemer, redeem_amount);
        let code = scripted_failure(&env, MarketOp::RedeemUnderlying);
        if code != 0 {
            return code;
        }
        pay_out(&env, &redeemer, redeem_amount)
    }

    pub fn repay_borrow_behalf(
        env: Env,
        payer: Address,
        borrower: Address,
        repay_amount: u128,
    ) -> u32 {
        payer.require_auth();
        record(&env, MarketOp::RepayBorrowBehalf, &borrower, repay_amount);
        let mut code = scripted_failure(&env, MarketOp::RepayBorrowBehalf);
        if code == 0 {
            code = env
                .storage()
                .persistent()
                .get(&DataKey::RepayFailure(borrower.clone()))
                .unwrap_or(0);
        }
        if code != 0 {
            return code;
        }
        pull_underlying(&env, &payer, repay_amount);
        let owed = Self::borrow_balance_stored(env.clone(), borrower.clone());
        Self::set_borrow_balance(env, borrower, owed.saturating_sub(repay_amount));
        0
    }
}

fn scripted_failure(env: &Env, op: MarketOp) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Failure(op))
        .unwrap_or(0)
}

fn record(env: &Env, op: MarketOp, account: &Address, amount: u128) {
    let count: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::CallCount(op))
        .unwrap_or(0);
    env.storage()
        .persistent()
        .set(&DataKey::CallCount(op), &(count + 1));
    env.storage().persistent().set(
        &DataKey::LastCall(op),
        &MarketCall {
            account: account.clone(),
            amount,
        },
    );
}

fn pull_underlying(env: &Env, from: &Address, amount: u128) {
    let market = env.current_contract_address();
    token::Client::new(env, &MockMarket::underlying(env.clone())).transfer_from(
        &market,
        from,
        &market,
        &(amount as i128),
    );
}

fn pay_out(env: &Env, to: &Address, amount: u128) -> u32 {
    let held = MockMarket::ctoken_balance(env.clone(), to.clone());
    if held < amount {
        return INSUFFICIENT_CTOKENS;
    }
    MockMarket::set_ctoken_balance(env.clone(), to.clone(), held - amount);
    let shortfall: u128 = env
        .storage()
        .persistent()
        .get(&DataKey::PayoutShortfall)
        .unwrap_or(0);
    let market = env.current_contract_address();
    token::Client::new(env, &MockMarket::underlying(env.clone())).transfer(
        &market,
        to,
        &(amount.saturating_sub(shortfall) as i128),
    );
    0
}
