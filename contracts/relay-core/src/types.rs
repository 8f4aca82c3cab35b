use soroban_sdk::{contracttype, Address};

/// One relayer repayment. `amount == REPAY_FULL_BALANCE` repays the live balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repayment {
    pub market: Address,
    pub borrower: Address,
    pub amount: u128,
    pub defaulted: bool,
}

/// One agent repayment against the agent's bound market.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrustedRepayment {
    pub borrower: Address,
    pub amount: u128,
    pub defaulted: bool,
}
