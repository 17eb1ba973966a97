#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod utils;

mod tests;

pub use crate::contract::{EscrowLedgerContract, EscrowLedgerContractClient};
