//! Waiting for an outbound HRMP channel towards a sibling chain to open.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    setup::NetworkInfo,
    state::{MessagingStateSource, ParaId},
    tools::{constants::CHANNEL_POLL_INTERVAL, rpc::StateClient},
};

/// Blocks until `node_name`'s messaging state contains an egress channel
/// towards the sibling named by `args[0]`.
///
/// There is no waiter-local retry limit or timeout; the harness invoking it
/// enforces its own global timeout. Transport and decode failures propagate
/// and abort the wait.
pub async fn wait_for_hrmp_channel_opened(
    node_name: &str,
    network: &NetworkInfo,
    args: &[String],
) -> Result<()> {
    let node = network.node(node_name)?;
    let sibling: ParaId = args
        .first()
        .context("missing sibling parachain id argument")?
        .parse()?;

    let client = StateClient::new(&node.rpc_url);
    wait_until_egress_open(&client, sibling, CHANNEL_POLL_INTERVAL).await
}

/// Polls `source` until a snapshot with an egress channel towards `sibling`
/// is observed, suspending for `poll_interval` between polls.
pub async fn wait_until_egress_open<S: MessagingStateSource>(
    source: &S,
    sibling: ParaId,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        if let Some(state) = source.messaging_state().await? {
            if state.has_egress_channel(sibling) {
                debug!("egress channel towards {sibling} is open");
                return Ok(());
            }
        }

        // Not open yet (or no snapshot at all), sleep and retry.
        debug!("no egress channel towards {sibling} yet");
        tokio::time::sleep(poll_interval).await;
    }
}
