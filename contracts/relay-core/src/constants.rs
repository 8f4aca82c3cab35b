/// Repay amount meaning "the borrower's whole live balance".
pub const REPAY_FULL_BALANCE: u128 = u128::MAX;
/// Market and comptroller success code.
pub const NO_ERROR: u32 = 0;
pub const UNLIMITED_ALLOWANCE: i128 = i128::MAX;

pub const MARKET_FAILURE_BASE: u32 = 1_000_000;
pub const COMPTROLLER_FAILURE_BASE: u32 = 2_000_000;
pub const MAX_EXTERNAL_CODE: u32 = 999_999;

pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;
