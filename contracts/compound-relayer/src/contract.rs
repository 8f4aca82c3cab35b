use relay_core::access;
use relay_core::market;
use relay_core::repay::{ensure_parallel_lengths, repay_on_behalf, MarketBinding, PayerAllowance};
use relay_core::rescue;
use relay_core::{RelayError, Repayment};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

use crate::storage;

/// Repays Compound borrows on behalf of borrowers with funds pulled from a
/// configured payer's allowance.
#[contract]
pub struct CompoundRelayer;

#[contractimpl]
impl CompoundRelayer {
    /// `sealed` deploys a bare code instance that can never be initialized.
    pub fn __constructor(env: Env, sealed: bool) {
        access::record_construction(&env, sealed);
    }

    pub fn initialize(env: Env, owner: Address) -> Result<(), RelayError> {
        access::initialize_owner(&env, &owner)
    }

    pub fn owner(env: Env) -> Option<Address> {
        access::owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RelayError> {
        access::transfer_ownership(&env, &caller, &new_owner)?;
        Ok(())
    }

    pub fn set_admin(
        env: Env,
        caller: Address,
        account: Address,
        status: bool,
    ) -> Result<(), RelayError> {
        access::set_admin(&env, &caller, &account, status)
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        access::is_admin(&env, &account)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), RelayError> {
        access::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), RelayError> {
        access::unpause(&env, &caller)
    }

    pub fn paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    pub fn set_compound_payer(env: Env, caller: Address, payer: Address) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        storage::set_compound_payer(&env, &payer)
    }

    pub fn compound_payer(env: Env) -> Option<Address> {
        storage::compound_payer(&env)
    }

    /// Enters `market` through its comptroller and approves it to pull the
    /// underlying. Running it again refreshes the allowance.
    pub fn enter_market(env: Env, caller: Address, market: Address) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        market::enter_market(&env, &market)?;
        Ok(())
    }

    pub fn repay_borrow_behalf(
        env: Env,
        caller: Address,
        market: Address,
        borrower: Address,
        amount: u128,
        defaulted: bool,
    ) -> Result<u128, RelayError> {
        let funding = authorize_repay(&env, &caller)?;
        let binding = MarketBinding::lookup(&env, &market);
        repay_on_behalf(&env, &funding, &binding, &borrower, amount, defaulted)
    }

    /// Repays in input order. Any failure aborts the whole batch.
    pub fn repay_borrows_behalf(
        env: Env,
        caller: Address,
        repayments: Vec<Repayment>,
    ) -> Result<Vec<u128>, RelayError> {
        let funding = authorize_repay(&env, &caller)?;
        let mut repaid = Vec::new(&env);
        for repayment in repayments.iter() {
            let binding = MarketBinding::lookup(&env, &repayment.market);
            repaid.push_back(repay_on_behalf(
                &env,
                &funding,
                &binding,
                &repayment.borrower,
                repayment.amount,
                repayment.defaulted,
            )?);
        }
        Ok(repaid)
    }

    pub fn repay_borrows_behalf_arrays(
        env: Env,
        caller: Address,
        market: Address,
        borrowers: Vec<Address>,
        amounts: Vec<u128>,
        defaulted: Vec<bool>,
    ) -> Result<Vec<u128>, RelayError> {
        let funding = authorize_repay(&env, &caller)?;
        ensure_parallel_lengths(&borrowers, &amounts, &defaulted)?;
        let binding = MarketBinding::lookup(&env, &market);
        let mut repaid = Vec::new(&env);
        for (i, borrower) in borrowers.iter().enumerate() {
            let i = i as u32;
            let amount = amounts.get(i).ok_or(RelayError::LengthMismatch)?;
            let is_defaulted = defaulted.get(i).ok_or(RelayError::LengthMismatch)?;
            repaid.push_back(repay_on_behalf(
                &env,
                &funding,
                &binding,
                &borrower,
                amount,
                is_defaulted,
            )?);
        }
        Ok(repaid)
    }

    /// Not gated by pause.
    pub fn rescue_token(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        rescue::rescue_token(&env, &token, &to, amount);
        Ok(())
    }

    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}

fn authorize_repay(env: &Env, caller: &Address) -> Result<PayerAllowance, RelayError> {
    access::require_admin(env, caller)?;
    access::require_not_paused(env)?;
    let payer = storage::compound_payer(env).ok_or(RelayError::PayerNotSet)?;
    Ok(PayerAllowance { payer })
}
