use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::llm_client::LlmError;

/// Bounded exponential backoff for rate-limited calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay after the `attempt`-th failure (1-based): base, 2×base, 4×base, ...
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

/// Runs `op`, retrying only on `LlmError::RateLimited`. Every other error
/// returns immediately. Once attempts run out the error reports how many
/// were made.
pub async fn retry_rate_limited<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match op().await {
            Err(LlmError::RateLimited { .. }) if attempt < max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "LLM call attempt {} rate limited, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
            Err(LlmError::RateLimited { .. }) => {
                return Err(LlmError::RateLimited { attempts: attempt })
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_delay_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(1));
        assert_eq!(policy.delay_after(2), Duration::from_secs(2));
        assert_eq!(policy.delay_after(3), Duration::from_secs(4));
    }

    #[test]
    fn test_delay_saturates() {
        let policy = RetryPolicy::default();
        assert!(policy.delay_after(u32::MAX) >= policy.delay_after(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_rate_limits() {
        let policy = RetryPolicy::default();
        let start = Instant::now();
        let mut calls = 0;

        let result = retry_rate_limited(&policy, || {
            calls += 1;
            let n = calls;
            async move {
                if n < 3 {
                    Err(LlmError::RateLimited { attempts: 1 })
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        // 1s + 2s of backoff
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let policy = RetryPolicy::default();
        let mut calls = 0;

        let result: Result<(), LlmError> = retry_rate_limited(&policy, || {
            calls += 1;
            async { Err(LlmError::RateLimited { attempts: 1 }) }
        })
        .await;

        assert!(matches!(result, Err(LlmError::RateLimited { attempts: 3 })));
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auth_failure_is_not_retried() {
        let policy = RetryPolicy::default();
        let mut calls = 0;

        let result: Result<(), LlmError> = retry_rate_limited(&policy, || {
            calls += 1;
            async { Err(LlmError::Auth("invalid key".to_string())) }
        })
        .await;

        assert!(matches!(result, Err(LlmError::Auth(_))));
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_request_is_not_retried() {
        let policy = RetryPolicy::default();
        let mut calls = 0;

        let result: Result<(), LlmError> = retry_rate_limited(&policy, || {
            calls += 1;
            async { Err(LlmError::BadRequest("bad".to_string())) }
        })
        .await;

        assert!(matches!(result, Err(LlmError::BadRequest(_))));
        assert_eq!(calls, 1);
    }
}
