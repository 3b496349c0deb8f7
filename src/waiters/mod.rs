//! Waiters blocking the harness until an on-chain condition holds.

pub mod hrmp;
