use std::time::{Duration, Instant};

/// Timeout for observing an effect of an injected event (ms).
pub const EVENT_TIMEOUT_MS: u64 = 2000;

/// Grace period for events that should have no observable effect (ms).
pub const SETTLE_MS: u64 = 100;

/// Poll a condition until it holds or the timeout elapses.
pub async fn wait_until<F>(cond: F, timeout_ms: u64) -> bool
where
    F: Fn() -> bool,
{
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        if cond() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Give the spawned event loop time to drain everything already queued.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(SETTLE_MS)).await;
}
