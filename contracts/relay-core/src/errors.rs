use soroban_sdk::{contracterror, log, panic_with_error, Env, Error, Symbol};

use crate::constants::{COMPTROLLER_FAILURE_BASE, MARKET_FAILURE_BASE, MAX_EXTERNAL_CODE};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RelayError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    NotAdmin = 4,
    Paused = 5,
    NotPaused = 6,
    AdminStatusUnchanged = 7,
    PayerUnchanged = 8,
    InvalidPayer = 9,
    PayerNotSet = 10,
    OwnerUnchanged = 11,
    InvalidOwner = 12,
    CapUnchanged = 13,
    CapExceeded = 14,
    LengthMismatch = 15,
    TransferFailed = 16,
    MintFailed = 17,
    BurnFailed = 18,
    AmountOverflow = 19,
    MalformedComptrollerResponse = 20,
}

/// A non-zero result code returned by the market or the comptroller.
///
/// The code travels to the caller as the contract error of the aborted
/// invocation: `MARKET_FAILURE_BASE + code` or `COMPTROLLER_FAILURE_BASE + code`.
/// Codes above `MAX_EXTERNAL_CODE` saturate.
///
/// The mapping is lossy: every code above `MAX_EXTERNAL_CODE` surfaces as the
/// same contract error. The exact code is only kept in the `log!` line
/// written by [`ExternalFailure::abort`], which needs a logging build.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExternalFailure {
    Market(u32),
    Comptroller(u32),
}

impl ExternalFailure {
    pub fn contract_code(&self) -> u32 {
        match *self {
            ExternalFailure::Market(code) => MARKET_FAILURE_BASE + code.min(MAX_EXTERNAL_CODE),
            ExternalFailure::Comptroller(code) => {
                COMPTROLLER_FAILURE_BASE + code.min(MAX_EXTERNAL_CODE)
            }
        }
    }

    pub fn from_contract_code(code: u32) -> Option<Self> {
        if (MARKET_FAILURE_BASE..=MARKET_FAILURE_BASE + MAX_EXTERNAL_CODE).contains(&code) {
            Some(ExternalFailure::Market(code - MARKET_FAILURE_BASE))
        } else if (COMPTROLLER_FAILURE_BASE..=COMPTROLLER_FAILURE_BASE + MAX_EXTERNAL_CODE)
            .contains(&code)
        {
            Some(ExternalFailure::Comptroller(code - COMPTROLLER_FAILURE_BASE))
        } else {
            None
        }
    }

    pub fn external_code(&self) -> u32 {
        match *self {
            ExternalFailure::Market(code) | ExternalFailure::Comptroller(code) => code,
        }
    }

    pub fn abort(self, env: &Env, function: &str) -> ! {
        log!(
            env,
            "external call failed",
            Symbol::new(env, function),
            self.external_code()
        );
        panic_with_error!(env, Error::from_contract_error(self.contract_code()))
    }
}
