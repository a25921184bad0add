//! Bounded retries with linear backoff around a [`TextGenerator`].

use async_trait::async_trait;
use ideagen_core::GenerateRequest;
use ideagen_error::{GenerationResult, RetryableError};
use ideagen_interface::TextGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Retry bound and base delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryConfig {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: usize,
    /// Delay before the second attempt; later attempts wait a multiple of it.
    pub initial_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryConfig {
    /// Creates a retry configuration.
    pub fn new(max_attempts: usize, initial_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
        }
    }

    /// Attempts actually made, never zero.
    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }

    /// Delay after failed attempt `index` (zero based): `initial_delay * (index + 1)`.
    pub fn delay_after(&self, index: usize) -> Duration {
        self.initial_delay
            .saturating_mul(u32::try_from(index + 1).unwrap_or(u32::MAX))
    }

    /// Waits between attempts, one fewer than [`attempts`](Self::attempts).
    ///
    /// # Examples
    ///
    /// ```
    /// use ideagen_models::RetryConfig;
    /// use std::time::Duration;
    ///
    /// let delays: Vec<_> = RetryConfig::default().delays().collect();
    /// assert_eq!(delays, [Duration::from_secs(1), Duration::from_secs(2)]);
    /// ```
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let config = *self;
        (0..config.attempts() - 1).map(move |index| config.delay_after(index))
    }
}

/// Call `generator` until it succeeds, fails permanently, or runs out of
/// attempts.
///
/// Only errors that report [`RetryableError::is_retryable`] (overload) are
/// retried. Anything else, and an overload on the final attempt, is returned
/// as is. Exhaustion always yields the last error observed.
#[instrument(skip_all, fields(model = %request.model(), max_attempts = config.attempts()))]
pub async fn generate_with_retry<D>(
    generator: &D,
    request: &GenerateRequest,
    config: &RetryConfig,
) -> GenerationResult<String>
where
    D: TextGenerator + ?Sized,
{
    let attempts = config.attempts();
    let attempt = AtomicUsize::new(0);
    let attempt = &attempt;

    Retry::spawn(config.delays(), move || async move {
        let index = attempt.fetch_add(1, Ordering::SeqCst);
        debug!(attempt = index + 1, "Calling model");

        match generator.generate(request).await {
            Ok(text) => {
                if index > 0 {
                    debug!(attempt = index + 1, "Generation succeeded after retry");
                }
                Ok(text)
            }
            Err(err) if err.is_retryable() && index + 1 < attempts => {
                warn!(
                    attempt = index + 1,
                    delay_ms = config.delay_after(index).as_millis() as u64,
                    error = %err.kind,
                    "Model overloaded, retrying"
                );
                Err(RetryError::Transient {
                    err,
                    retry_after: None,
                })
            }
            Err(err) => {
                if err.is_retryable() {
                    warn!(attempt = index + 1, "All retry attempts exhausted");
                } else {
                    debug!(error = %err.kind, "Error is not retryable, failing immediately");
                }
                Err(RetryError::Permanent(err))
            }
        }
    })
    .await
}

/// A [`TextGenerator`] that retries its inner generator on overload.
///
/// Every prompt type goes through the same wrapper; handlers never carry
/// their own retry loop.
#[derive(Debug, Clone)]
pub struct RetryingGenerator<D> {
    inner: D,
    config: RetryConfig,
}

impl<D: TextGenerator> RetryingGenerator<D> {
    /// Wrap `inner` with `config`.
    pub fn new(inner: D, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Returns the retry configuration.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Returns the wrapped generator.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

#[async_trait]
impl<D: TextGenerator> TextGenerator for RetryingGenerator<D> {
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<String> {
        generate_with_retry(&self.inner, request, &self.config).await
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_are_linear() {
        let config = RetryConfig::new(4, Duration::from_millis(250));
        let delays: Vec<_> = config.delays().collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(250),
                Duration::from_millis(500),
                Duration::from_millis(750)
            ]
        );
    }

    #[test]
    fn test_single_attempt_has_no_delays() {
        assert_eq!(RetryConfig::new(1, Duration::from_secs(1)).delays().count(), 0);
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let config = RetryConfig::new(0, Duration::from_secs(1));
        assert_eq!(config.attempts(), 1);
        assert_eq!(config.delays().count(), 0);
    }
}
