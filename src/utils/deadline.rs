//! Time-bounded execution for outbound store calls.
//!
//! A [`Deadline`] is fixed when a request starts and handed to every store
//! call it makes. When it expires the in-flight future is dropped, which
//! aborts the driver operation.

use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::Instant;

use super::error::AppError;

/// Budget for a single request-time store operation
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Budget for establishing the initial store connection
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Budget for each step of the shutdown sequence
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
            budget,
        }
    }

    /// Deadline for one request-time store operation
    pub fn for_request() -> Self {
        Self::after(REQUEST_TIMEOUT)
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// Drives `fut` until it completes or the deadline passes.
    pub async fn run<F: IntoFuture>(self, fut: F) -> Result<F::Output, AppError> {
        tokio::time::timeout_at(self.at, fut.into_future())
            .await
            .map_err(|_| AppError::Timeout(self.budget))
    }
}
