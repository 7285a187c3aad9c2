//! Request pacer built on governor and a Tokio semaphore.
//!
//! - Governor (GCRA algorithm) spaces consecutive calls by the configured delay
//! - Tokio Semaphore bounds the number of calls in flight

use crate::PacingConfig;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use mangaka_error::{MangakaResult, PacingError, PacingErrorKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, instrument};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Spaces backend calls and bounds how many run at once.
///
/// The first call passes immediately; each following call waits until the
/// configured delay has elapsed since the previous one was admitted.
///
/// # Example
///
/// ```rust
/// use mangaka_rate_limit::{PacingConfig, Pacer};
///
/// # async fn example() -> mangaka_error::MangakaResult<()> {
/// let pacer = Pacer::new(&PacingConfig { delay_ms: 1000, max_in_flight: 1 })?;
///
/// let guard = pacer.acquire().await?;
/// // Call the backend...
/// drop(guard); // Releases the in-flight slot
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Pacer {
    // Absent when the delay is zero
    spacing: Option<Arc<DirectRateLimiter>>,
    in_flight: Arc<Semaphore>,
    delay: Duration,
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer")
            .field("delay", &self.delay)
            .field("available_slots", &self.in_flight.available_permits())
            .finish()
    }
}

impl Pacer {
    /// Create a pacer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_in_flight` is zero.
    pub fn new(config: &PacingConfig) -> MangakaResult<Self> {
        if config.max_in_flight == 0 {
            return Err(PacingError::new(PacingErrorKind::InvalidConfig(
                "max_in_flight must be at least 1".to_string(),
            ))
            .into());
        }

        let delay = config.delay();
        let spacing =
            Quota::with_period(delay).map(|quota| Arc::new(GovernorRateLimiter::direct(quota)));

        Ok(Self {
            spacing,
            in_flight: Arc::new(Semaphore::new(config.max_in_flight as usize)),
            delay,
        })
    }

    /// A pacer that never waits, with a single in-flight slot.
    pub fn unpaced() -> Self {
        Self {
            spacing: None,
            in_flight: Arc::new(Semaphore::new(1)),
            delay: Duration::ZERO,
        }
    }

    /// Configured spacing between calls.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait until the next call is allowed.
    ///
    /// Returns a guard that releases the in-flight slot when dropped.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub async fn acquire(&self) -> MangakaResult<PacerGuard> {
        if let Some(limiter) = &self.spacing {
            limiter.until_ready().await;
        }

        // Slot last, so a waiting caller does not hold it
        let permit = self
            .in_flight
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| PacingError::new(PacingErrorKind::Closed))?;

        debug!("Pacer admitted call");
        Ok(PacerGuard { _permit: permit })
    }

    /// Try to acquire without waiting.
    ///
    /// Returns `None` if the call would have to wait.
    pub fn try_acquire(&self) -> Option<PacerGuard> {
        if let Some(limiter) = &self.spacing {
            limiter.check().ok()?;
        }

        let permit = self.in_flight.clone().try_acquire_owned().ok()?;
        Some(PacerGuard { _permit: permit })
    }
}

/// Holds an in-flight slot until dropped.
#[derive(Debug)]
pub struct PacerGuard {
    _permit: OwnedSemaphorePermit,
}
