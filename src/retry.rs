use std::{future::Future, time::Duration};

use tokio::time::sleep;

use crate::{Res, TuneNestError, warning};

/// Runs `operation` until it succeeds, retrying up to `max_retries` times.
///
/// Every failed attempt is logged, then the task waits `delay` (fixed, no
/// backoff) before the next attempt. The wait is an async sleep, so the worker
/// thread stays free for other requests while a detail fetch is backing off.
///
/// `NotFound` is returned immediately: asking again will not make a missing
/// entity appear. Any other error is retried; once `max_retries + 1` attempts
/// have failed the result is [`TuneNestError::RetryExhausted`], never a partial
/// value.
///
/// # Example
///
/// ```
/// let detail = with_retry(3, Duration::from_secs(2), || fetch_detail(&id)).await?;
/// ```
pub async fn with_retry<T, F, Fut>(max_retries: u32, delay: Duration, mut operation: F) -> Res<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Res<T>>,
{
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_not_found() => return Err(err),
            Err(err) => err,
        };

        if attempt > max_retries {
            return Err(TuneNestError::RetryExhausted {
                attempts: attempt,
                last_error: err.to_string(),
            });
        }

        warning!(
            "Attempt {}/{} failed: {}. Retrying in {:?}",
            attempt,
            max_retries + 1,
            err,
            delay
        );
        sleep(delay).await;
    }
}
