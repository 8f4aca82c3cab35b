#![no_std]
//! Shared building blocks of the Compound relayer and agent contracts: access
//! control, the repay-on-behalf flow and the market/comptroller client traits.

pub mod access;
pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod interfaces;
pub mod market;
pub mod repay;
pub mod rescue;
pub mod storage;
pub mod types;

pub use errors::{ExternalFailure, RelayError};
pub use types::{Repayment, TrustedRepayment};
