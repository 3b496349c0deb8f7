//! Access to the orchestrator's view of a running test network.

pub mod config;

pub use config::{NetworkInfo, NodeDescriptor};
