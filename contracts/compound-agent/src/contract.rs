use relay_core::constants::UNLIMITED_ALLOWANCE;
use relay_core::helpers::{grant_allowance, to_i128};
use relay_core::repay::{
    ensure_parallel_lengths, repay_on_behalf, FundingSource, MarketBinding, MintToSelf,
};
use relay_core::{access, events, market, rescue};
use relay_core::{RelayError, TrustedRepayment};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

use crate::storage;

/// Trusted agent bound to a single Compound market. Repayments are funded by
/// minting the underlying, so the agent must be a minter of that token.
#[contract]
pub struct CompoundAgent;

#[contractimpl]
impl CompoundAgent {
    pub fn __constructor(env: Env, sealed: bool) {
        access::record_construction(&env, sealed);
    }

    /// Binds the agent to `market`, enters it and approves both the market and
    /// `owner` to move the agent's underlying without limit.
    pub fn initialize(env: Env, owner: Address, market: Address) -> Result<(), RelayError> {
        access::initialize_owner(&env, &owner)?;
        let underlying = market::enter_market(&env, &market)?;
        storage::bind_market(&env, &market, &underlying);
        grant_allowance(&env, &underlying, &owner, UNLIMITED_ALLOWANCE);
        Ok(())
    }

    pub fn owner(env: Env) -> Option<Address> {
        access::owner(&env)
    }

    pub fn market(env: Env) -> Result<Address, RelayError> {
        Ok(storage::market_binding(&env)?.market)
    }

    pub fn underlying(env: Env) -> Result<Address, RelayError> {
        Ok(storage::market_binding(&env)?.underlying)
    }

    /// Also moves the unlimited underlying allowance from the previous owner
    /// to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RelayError> {
        let previous = access::transfer_ownership(&env, &caller, &new_owner)?;
        let binding = storage::market_binding(&env)?;
        grant_allowance(&env, &binding.underlying, &previous, 0);
        grant_allowance(&env, &binding.underlying, &new_owner, UNLIMITED_ALLOWANCE);
        Ok(())
    }

    /// Re-grants the market and owner allowances before they expire.
    pub fn refresh_allowances(env: Env, caller: Address) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        let binding = storage::market_binding(&env)?;
        grant_allowance(&env, &binding.underlying, &binding.market, UNLIMITED_ALLOWANCE);
        grant_allowance(&env, &binding.underlying, &caller, UNLIMITED_ALLOWANCE);
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

    pub fn mint(env: Env, caller: Address, amount: u128) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        let binding = storage::market_binding(&env)?;
        market::supply(&env, &binding.market, amount);
        Ok(())
    }

    pub fn redeem(env: Env, caller: Address, redeem_tokens: u128) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        let binding = storage::market_binding(&env)?;
        market::redeem(&env, &binding.market, redeem_tokens);
        Ok(())
    }

    pub fn redeem_underlying(
        env: Env,
        caller: Address,
        redeem_amount: u128,
    ) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        let binding = storage::market_binding(&env)?;
        market::redeem_underlying(&env, &binding.market, redeem_amount);
        Ok(())
    }

    pub fn repay_trusted_borrow(
        env: Env,
        caller: Address,
        borrower: Address,
        amount: u128,
        defaulted: bool,
    ) -> Result<u128, RelayError> {
        let binding = authorize_admin_action(&env, &caller)?;
        repay_on_behalf(&env, &MintToSelf, &binding, &borrower, amount, defaulted)
    }

    pub fn repay_trusted_borrows(
        env: Env,
        caller: Address,
        repayments: Vec<TrustedRepayment>,
    ) -> Result<Vec<u128>, RelayError> {
        let binding = authorize_admin_action(&env, &caller)?;
        let mut repaid = Vec::new(&env);
        for repayment in repayments.iter() {
            repaid.push_back(repay_on_behalf(
                &env,
                &MintToSelf,
                &binding,
                &repayment.borrower,
                repayment.amount,
                repayment.defaulted,
            )?);
        }
        Ok(repaid)
    }

    pub fn repay_trusted_borrows_arrays(
        env: Env,
        caller: Address,
        borrowers: Vec<Address>,
        amounts: Vec<u128>,
        defaulted: Vec<bool>,
    ) -> Result<Vec<u128>, RelayError> {
        let binding = authorize_admin_action(&env, &caller)?;
        ensure_parallel_lengths(&borrowers, &amounts, &defaulted)?;
        let mut repaid = Vec::new(&env);
        for (i, borrower) in borrowers.iter().enumerate() {
            let i = i as u32;
            let amount = amounts.get(i).ok_or(RelayError::LengthMismatch)?;
            let is_defaulted = defaulted.get(i).ok_or(RelayError::LengthMismatch)?;
            repaid.push_back(repay_on_behalf(
                &env,
                &MintToSelf,
                &binding,
                &borrower,
                amount,
                is_defaulted,
            )?);
        }
        Ok(repaid)
    }

    /// Mints `amount` of underlying for collected debt and supplies it to the
    /// market. Bounded by the mint-on-debt-collection cap.
    pub fn mint_on_debt_collection(
        env: Env,
        caller: Address,
        borrower: Address,
        amount: u128,
    ) -> Result<(), RelayError> {
        let binding = authorize_admin_action(&env, &caller)?;
        let cap = storage::mint_on_debt_collection_cap(&env);
        if amount > cap {
            log!(&env, "debt collection above cap", amount, cap);
            return Err(RelayError::CapExceeded);
        }
        events::mint_on_debt_collection(&env, &borrower, amount);
        MintToSelf.fund(&env, &binding.underlying, to_i128(amount)?)?;
        market::supply(&env, &binding.market, amount);
        Ok(())
    }

    pub fn set_mint_on_debt_collection_cap(
        env: Env,
        caller: Address,
        cap: u128,
    ) -> Result<(), RelayError> {
        access::require_owner(&env, &caller)?;
        storage::set_mint_on_debt_collection_cap(&env, cap)
    }

    pub fn mint_on_debt_collection_cap(env: Env) -> u128 {
        storage::mint_on_debt_collection_cap(&env)
    }

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

fn authorize_admin_action(env: &Env, caller: &Address) -> Result<MarketBinding, RelayError> {
    access::require_admin(env, caller)?;
    access::require_not_paused(env)?;
    storage::market_binding(env)
}
