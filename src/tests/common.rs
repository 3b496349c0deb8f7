//! Shared helpers for the waiter tests.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::state::{AbridgedHrmpChannel, MessagingStateSnapshot, MessagingStateSource, ParaId};

/// One scripted answer of a [`ScriptedSource`].
pub(super) enum Poll {
    /// The chain has not recorded a snapshot yet.
    Absent,
    /// A snapshot with egress channels towards the given siblings.
    Egress(Vec<ParaId>),
    /// A transport failure.
    Fail,
}

/// Deterministic [`MessagingStateSource`] fed from a fixed answer sequence.
/// Once the script runs out, further polls observe no snapshot.
pub(super) struct ScriptedSource {
    script: Mutex<VecDeque<Poll>>,
    polls: AtomicUsize,
}

impl ScriptedSource {
    pub(super) fn new(script: Vec<Poll>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            polls: AtomicUsize::new(0),
        }
    }

    /// Number of queries observed so far.
    pub(super) fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessagingStateSource for ScriptedSource {
    async fn messaging_state(&self) -> Result<Option<MessagingStateSnapshot>> {
        self.polls.fetch_add(1, Ordering::SeqCst);

        match self.script.lock().unwrap().pop_front() {
            None | Some(Poll::Absent) => Ok(None),
            Some(Poll::Egress(siblings)) => Ok(Some(snapshot_with_egress(&siblings))),
            Some(Poll::Fail) => Err(anyhow!("connection dropped")),
        }
    }
}

/// Builds a snapshot whose egress channels point at the given siblings.
pub(super) fn snapshot_with_egress(siblings: &[ParaId]) -> MessagingStateSnapshot {
    let channels = siblings
        .iter()
        .map(|sibling| (*sibling, AbridgedHrmpChannel::default()))
        .collect();

    MessagingStateSnapshot {
        dmq_mqc_head: "0x00".into(),
        relay_dispatch_queue_size: (0, 0),
        ingress_channels: Vec::new(),
        egress_channels: channels,
    }
}
