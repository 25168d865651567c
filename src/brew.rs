//! Waiting on a cup until it can be drunk.
//!
//! Readiness is never pushed by the cup. These helpers poll it from the
//! caller's task, sleeping between checks.

use crate::cup::TeaCup;
use crate::error::TeaError;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// Polls `cup` until [`TeaCup::is_ready_to_drink`] holds.
///
/// Between polls the task sleeps for `poll_interval`, or for the remaining
/// steeping time if that is shorter. A cup whose water never reaches the
/// right temperature is polled forever; bound the wait with [`steep`] or
/// `tokio::time::timeout`.
///
/// # Errors
///
/// Returns [`TeaError::NoTea`] if the cup has nothing steeping in it.
pub async fn wait_until_ready(cup: &TeaCup, poll_interval: Duration) -> Result<(), TeaError> {
    let Some(tea) = cup.tea() else {
        return Err(TeaError::NoTea);
    };

    while !cup.is_ready_to_drink() {
        let remaining = cup.steeping_time_remaining();
        let pause = if remaining > 0 {
            poll_interval.min(Duration::from_secs(remaining.unsigned_abs()))
        } else {
            poll_interval
        };
        debug!(
            "'{}' not ready: {}s remaining, temperature ideal: {}",
            tea.name(),
            remaining,
            cup.is_temperature_ideal()
        );
        sleep(pause).await;
    }

    info!(
        "'{}' ready after {}s",
        tea.name(),
        cup.steeping_time_elapsed()
    );
    Ok(())
}

/// Like [`wait_until_ready`], giving up after `limit`.
///
/// # Errors
///
/// Returns [`TeaError::SteepTimeout`] if the cup is still not drinkable
/// once `limit` has passed, and [`TeaError::NoTea`] for a cup without tea.
pub async fn steep(cup: &TeaCup, poll_interval: Duration, limit: Duration) -> Result<(), TeaError> {
    match timeout(limit, wait_until_ready(cup, poll_interval)).await {
        Ok(result) => result,
        Err(_) => {
            let tea = cup.tea().map(|t| t.name().to_string()).unwrap_or_default();
            warn!("'{}' still not ready after {:?}", tea, limit);
            Err(TeaError::SteepTimeout {
                tea,
                waited_secs: limit.as_secs(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::tea::Tea;
    use std::sync::Arc;

    /// Seconds on tokio's clock, so paused test time drives the cup.
    #[derive(Debug)]
    struct RuntimeClock {
        origin: tokio::time::Instant,
    }

    impl Clock for RuntimeClock {
        fn now_secs(&self) -> i64 {
            self.origin.elapsed().as_secs() as i64
        }
    }

    fn runtime_cup() -> TeaCup {
        TeaCup::with_clock(Arc::new(RuntimeClock {
            origin: tokio::time::Instant::now(),
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_until_ready_sleeps_out_the_steep() {
        let mut cup = runtime_cup();
        cup.add_water(80);
        cup.add_tea(Tea::new("Green Tea", 120, 80, true)).unwrap();

        let started = tokio::time::Instant::now();
        wait_until_ready(&cup, Duration::from_secs(30)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(120));
        assert!(cup.is_ready_to_drink());
    }

    #[tokio::test]
    async fn test_ready_cup_returns_immediately() {
        let clock = ManualClock::new(1000);
        let mut cup = TeaCup::with_clock(Arc::new(clock.clone()));
        cup.add_water(80);
        cup.add_tea(Tea::new("Test Tea", 0, 80, false)).unwrap();

        assert!(wait_until_ready(&cup, Duration::from_secs(3600)).await.is_ok());
    }

    #[tokio::test]
    async fn test_cup_without_tea() {
        let mut cup = TeaCup::new();
        assert!(matches!(
            wait_until_ready(&cup, Duration::from_secs(1)).await,
            Err(TeaError::NoTea)
        ));

        cup.add_water(80);
        assert!(matches!(
            steep(&cup, Duration::from_secs(1), Duration::from_secs(5)).await,
            Err(TeaError::NoTea)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_steep_times_out_when_water_is_wrong() {
        let mut cup = runtime_cup();
        cup.add_water(20);
        cup.add_tea(Tea::new("Green Tea", 10, 80, true)).unwrap();

        let error = steep(&cup, Duration::from_secs(1), Duration::from_secs(60))
            .await
            .unwrap_err();

        match error {
            TeaError::SteepTimeout { tea, waited_secs } => {
                assert_eq!(tea, "Green Tea");
                assert_eq!(waited_secs, 60);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
