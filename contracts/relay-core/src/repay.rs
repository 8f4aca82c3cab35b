use soroban_sdk::{log, token, Address, Env, Vec};

use crate::constants::REPAY_FULL_BALANCE;
use crate::errors::RelayError;
use crate::events;
use crate::helpers::to_i128;
use crate::interfaces::{MarketClient, MintableTokenClient};
use crate::market::{ensure_market_success, redeem_underlying};

/// Where the underlying for a repayment comes from.
pub trait FundingSource {
    fn fund(&self, env: &Env, underlying: &Address, amount: i128) -> Result<(), RelayError>;
}

/// Pulls funds from `payer` through the allowance it granted this contract.
pub struct PayerAllowance {
    pub payer: Address,
}

impl FundingSource for PayerAllowance {
    fn fund(&self, env: &Env, underlying: &Address, amount: i128) -> Result<(), RelayError> {
        let this = env.current_contract_address();
        match token::Client::new(env, underlying).try_transfer_from(
            &this,
            &self.payer,
            &this,
            &amount,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(env, "payer transfer refused", self.payer.clone(), amount);
                Err(RelayError::TransferFailed)
            }
        }
    }
}

/// Mints fresh underlying to this contract, which must be a minter of it.
pub struct MintToSelf;

impl FundingSource for MintToSelf {
    fn fund(&self, env: &Env, underlying: &Address, amount: i128) -> Result<(), RelayError> {
        let this = env.current_contract_address();
        match MintableTokenClient::new(env, underlying).try_mint(&this, &amount) {
            Ok(Ok(true)) => Ok(()),
            _ => {
                log!(env, "underlying mint refused", amount);
                Err(RelayError::MintFailed)
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketBinding {
    pub market: Address,
    pub underlying: Address,
}

impl MarketBinding {
    pub fn lookup(env: &Env, market: &Address) -> Self {
        MarketBinding {
            market: market.clone(),
            underlying: MarketClient::new(env, market).underlying(),
        }
    }
}

/// `REPAY_FULL_BALANCE` becomes the borrower's live balance, which also accrues
/// interest inside the market. Anything else, zero included, passes through.
pub fn resolve_repay_amount(market: &MarketClient, borrower: &Address, amount: u128) -> u128 {
    if amount == REPAY_FULL_BALANCE {
        market.borrow_balance_current(borrower)
    } else {
        amount
    }
}

/// Funds and repays `borrower`'s debt in `binding.market`, then writes the
/// debt off when `defaulted`. Returns the amount actually repaid.
pub fn repay_on_behalf<F: FundingSource>(
    env: &Env,
    funding: &F,
    binding: &MarketBinding,
    borrower: &Address,
    amount: u128,
    defaulted: bool,
) -> Result<u128, RelayError> {
    let market = MarketClient::new(env, &binding.market);
    let actual = resolve_repay_amount(&market, borrower, amount);
    funding.fund(env, &binding.underlying, to_i128(actual)?)?;

    let code = market.repay_borrow_behalf(&env.current_contract_address(), borrower, &actual);
    ensure_market_success(env, "repay_borrow_behalf", code);
    events::repay_borrow_behalf(env, &binding.market, borrower, actual);

    if defaulted {
        settle_default(env, binding, borrower, actual)?;
    }
    Ok(actual)
}

/// Redeems the repaid amount back out of the market and burns it.
pub fn settle_default(
    env: &Env,
    binding: &MarketBinding,
    borrower: &Address,
    amount: u128,
) -> Result<(), RelayError> {
    let burn_amount = to_i128(amount)?;
    redeem_underlying(env, &binding.market, amount);

    let this = env.current_contract_address();
    match token::Client::new(env, &binding.underlying).try_burn(&this, &burn_amount) {
        Ok(Ok(())) => {}
        _ => return Err(RelayError::BurnFailed),
    }
    events::default_repayment(env, &binding.market, borrower, amount);
    Ok(())
}

pub fn ensure_parallel_lengths(
    borrowers: &Vec<Address>,
    amounts: &Vec<u128>,
    defaulted: &Vec<bool>,
) -> Result<(), RelayError> {
    if borrowers.len() != amounts.len() || borrowers.len() != defaulted.len() {
        return Err(RelayError::LengthMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::vec;

    #[test]
    fn parallel_lengths_must_match() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let borrowers = vec![&env, a, b];

        assert_eq!(
            ensure_parallel_lengths(&borrowers, &vec![&env, 1u128, 2u128], &vec![&env, false, true]),
            Ok(())
        );
        assert_eq!(
            ensure_parallel_lengths(&borrowers, &vec![&env, 1u128], &vec![&env, false, true]),
            Err(RelayError::LengthMismatch)
        );
        assert_eq!(
            ensure_parallel_lengths(&borrowers, &vec![&env, 1u128, 2u128], &vec![&env, false]),
            Err(RelayError::LengthMismatch)
        );
    }

    #[test]
    fn amounts_above_i128_are_rejected() {
        assert_eq!(to_i128(i128::MAX as u128), Ok(i128::MAX));
        assert_eq!(to_i128(i128::MAX as u128 + 1), Err(RelayError::AmountOverflow));
    }
}
