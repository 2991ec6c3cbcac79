use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Bounded fixed-delay retry. Shared by the direct task launcher and
/// the auto-scaling gateway launcher, which differ only in attempt
/// bound and in what counts as one attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

/// All attempts failed; carries the bound that was hit and the error
/// from the final attempt.
#[derive(Debug)]
pub struct RetriesExhausted {
    pub attempts: u32,
    pub last_error: anyhow::Error,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Runs `operation` until it succeeds or the attempt bound is hit,
    /// sleeping the fixed delay between attempts. The closure receives
    /// the 1-based attempt number.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, RetriesExhausted>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let mut attempt: u32 = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        "Attempt {} failed: {:#}",
                        attempt,
                        error
                    );
                    if attempt >= self.max_attempts {
                        return Err(RetriesExhausted {
                            attempts: attempt,
                            last_error: error,
                        });
                    }
                    attempt += 1;
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}
