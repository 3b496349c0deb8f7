//! The messaging-state snapshot exposed by a parachain node, and the
//! capability to fetch it.

use std::{fmt, num::ParseIntError, str::FromStr};

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// A parachain identifier, as used to address a sibling chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct ParaId(pub u32);

impl FromStr for ParaId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for ParaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a single HRMP channel, as mirrored into the parachain's state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbridgedHrmpChannel {
    pub max_capacity: u32,
    pub max_total_size: u32,
    pub max_message_size: u32,
    pub msg_count: u32,
    pub total_size: u32,
    /// Head of the message-queue chain, absent while the channel is empty.
    pub mqc_head: Option<String>,
}

/// Point-in-time view of a chain's cross-chain messaging configuration, as
/// exposed by its state-query interface.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingStateSnapshot {
    pub dmq_mqc_head: String,
    pub relay_dispatch_queue_size: (u32, u32),
    /// Inbound channels, keyed by the sending sibling.
    pub ingress_channels: Vec<(ParaId, AbridgedHrmpChannel)>,
    /// Outbound channels, keyed by the receiving sibling.
    pub egress_channels: Vec<(ParaId, AbridgedHrmpChannel)>,
}

impl MessagingStateSnapshot {
    /// Whether an outbound channel towards `sibling` exists in this snapshot.
    pub fn has_egress_channel(&self, sibling: ParaId) -> bool {
        self.egress_channels.iter().any(|(id, _)| *id == sibling)
    }
}

/// Capability to fetch the current messaging-state snapshot from a running
/// node. The snapshot may be absent before the chain has produced one.
#[async_trait]
pub trait MessagingStateSource {
    async fn messaging_state(&self) -> Result<Option<MessagingStateSnapshot>>;
}
