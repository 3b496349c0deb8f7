use std::time::Duration;

/// Interval between two polls of a node's messaging state. Channel requests
/// are only acted upon at session boundaries, so polling faster buys nothing.
pub const CHANNEL_POLL_INTERVAL: Duration = Duration::from_secs(12);

/// Timeout when waiting for an expected result in tests.
pub const EXPECTED_RESULT_TIMEOUT: Duration = Duration::from_secs(20);

/// The state-query method exposing the chain's messaging state.
pub const MESSAGING_STATE_METHOD: &str = "parachainSystem_relevantMessagingState";
