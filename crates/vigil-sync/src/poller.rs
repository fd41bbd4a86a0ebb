//! The condition poller.
//!
//! One bounded-time repeated-evaluation cycle of a probe: run the probe,
//! return on `Ready` or `Halted`, otherwise check the deadline, sleep one
//! interval, and probe again. Sequential and single-actor; the only ways
//! out are probe success, permanent failure, probe fault, or the deadline.

use crate::outcome::{Outcome, PollResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use vigil_core::{VigilError, WaitDefaults};

/// Default timeout for poll operations (10 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default interval between probes (250ms).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

/// Budget for one poll invocation.
///
/// Invariant: `interval` is strictly positive (`timeout` may be zero,
/// which grants exactly one probe attempt). Enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    timeout: Duration,
    interval: Duration,
}

impl PollConfig {
    /// Create a new poll configuration.
    ///
    /// # Errors
    /// Returns error if `interval` is zero.
    pub fn new(timeout: Duration, interval: Duration) -> Result<Self, VigilError> {
        if interval.is_zero() {
            return Err(VigilError::Validation(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self { timeout, interval })
    }

    /// Create a poll configuration from the suite-wide wait defaults.
    ///
    /// # Errors
    /// Returns error if the configured interval is zero.
    pub fn from_defaults(defaults: &WaitDefaults) -> Result<Self, VigilError> {
        Self::new(defaults.timeout(), defaults.interval())
    }

    /// Replace the timeout, keeping the interval.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Maximum time to keep probing.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Delay between probe invocations.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Repeatedly evaluate `probe` until it settles or the budget elapses.
///
/// The probe runs at least once, even with a zero timeout; the deadline
/// is only checked after a probe reports `Pending`. `Ready` and `Halted`
/// return immediately with no further sleeping. A probe fault (`Err`)
/// propagates unwrapped — it is never reinterpreted as a timeout.
pub async fn poll<T, E, F, Fut>(mut probe: F, config: &PollConfig) -> Result<PollResult<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Outcome<T>, E>>,
{
    let started = Instant::now();

    loop {
        match probe().await? {
            Outcome::Ready(value) => return Ok(PollResult::Success(value)),
            Outcome::Halted(reason) => {
                tracing::debug!(reason = %reason, "condition permanently unreachable");
                return Ok(PollResult::Failed(reason));
            }
            Outcome::Pending => {}
        }

        if started.elapsed() >= config.timeout {
            tracing::debug!(timeout = ?config.timeout, "poll budget elapsed");
            return Ok(PollResult::TimedOut);
        }

        sleep(config.interval).await;
    }
}

/// Poll, and on timeout grant one passive grace period before a final probe.
///
/// Models the catch-the-timeout-then-wait-longer pattern: when the
/// bounded poll times out, sleep `grace` without probing, then inspect
/// the state exactly once more. The final probe's `Pending` maps back to
/// `TimedOut`; `Ready` and `Halted` map to `Success` and `Failed` as
/// usual. This is a composition over [`poll`], not part of it.
pub async fn poll_with_grace<T, E, F, Fut>(
    mut probe: F,
    config: &PollConfig,
    grace: Duration,
) -> Result<PollResult<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Outcome<T>, E>>,
{
    match poll(&mut probe, config).await? {
        PollResult::TimedOut => {
            tracing::debug!(grace = ?grace, "poll timed out, granting grace period");
            sleep(grace).await;

            Ok(match probe().await? {
                Outcome::Ready(value) => PollResult::Success(value),
                Outcome::Pending => PollResult::TimedOut,
                Outcome::Halted(reason) => PollResult::Failed(reason),
            })
        }
        settled => Ok(settled),
    }
}
