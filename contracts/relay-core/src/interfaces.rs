use soroban_sdk::{Address, Env, Vec};

/// Lending market consumed by the relayer and the agent. Every state-changing
/// call returns 0 on success and an opaque failure code otherwise.
#[soroban_sdk::contractclient(name = "MarketClient")]
pub trait MarketContract {
    fn mint(env: Env, minter: Address, mint_amount: u128) -> u32;
    fn redeem(env: Env, redeemer: Address, redeem_tokens: u128) -> u32;
    fn redeem_underlying(env: Env, redeemer: Address, redeem_amount: u128) -> u32;
    fn repay_borrow_behalf(env: Env, payer: Address, borrower: Address, repay_amount: u128)
        -> u32;
    fn borrow_balance_current(env: Env, account: Address) -> u128;
    fn underlying(env: Env) -> Address;
    fn comptroller(env: Env) -> Address;
}

#[soroban_sdk::contractclient(name = "ComptrollerClient")]
pub trait ComptrollerContract {
    fn enter_markets(env: Env, account: Address, markets: Vec<Address>) -> Vec<u32>;
}

/// Mint extension of the underlying token; `false` means the mint was refused.
#[soroban_sdk::contractclient(name = "MintableTokenClient")]
pub trait MintableTokenContract {
    fn mint(env: Env, to: Address, amount: i128) -> bool;
}
