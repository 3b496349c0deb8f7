//! Utilities shared by the waiters and their tests.

pub mod constants;
pub mod rpc;

/// Waits until an expression is true or times out.
///
/// Uses polling to cut down on time otherwise used by calling `sleep` in tests.
#[macro_export]
macro_rules! wait_until {
    ($wait_limit: expr, $condition: expr) => {
        let now = std::time::Instant::now();
        loop {
            if $condition {
                break;
            }

            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            if now.elapsed() > $wait_limit {
                panic!("timed out!");
            }
        }
    };
}
