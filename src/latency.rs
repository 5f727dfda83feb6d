use std::time::Duration;

use tracing::trace;

/// Delay used by mock routes that do not configure their own.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Resolves once `duration` has elapsed. Mock routes await this before
/// answering so clients exercise their loading states.
pub async fn simulate_delay(duration: Duration) {
    trace!(delay_ms = duration.as_millis() as u64, "simulating latency");
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn waits_for_the_requested_duration() {
        let started = Instant::now();
        simulate_delay(Duration::from_millis(250)).await;
        assert!(started.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn default_delay_is_one_second() {
        let started = Instant::now();
        simulate_delay(DEFAULT_DELAY).await;
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn zero_delay_resolves() {
        simulate_delay(Duration::ZERO).await;
    }
}
