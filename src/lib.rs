//! Helpers used by a network-orchestration test harness to block test
//! progression until an on-chain condition holds on a running parachain.

pub mod setup;
pub mod state;
pub mod tools;
pub mod waiters;

#[cfg(test)]
mod tests;
