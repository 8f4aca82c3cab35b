#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
mod storage;

pub use contract::{CompoundAgent, CompoundAgentClient};
pub use relay_core::{RelayError, TrustedRepayment};
