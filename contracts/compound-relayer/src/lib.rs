#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
mod storage;

pub use contract::{CompoundRelayer, CompoundRelayerClient};
pub use relay_core::{RelayError, Repayment};
