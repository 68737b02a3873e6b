//! Re-run a fallible operation until it succeeds or a policy gives up.
//!
//! ```
//! use seqflow::retry::{retry, RetryPolicy};
//!
//! let value = retry(
//!     |attempt| if attempt < 2 { anyhow::bail!("not yet") } else { Ok(attempt * 10) },
//!     3u32,
//! )?;
//! assert_eq!(value, 20);
//!
//! let gave_up = retry(|_| -> anyhow::Result<()> { anyhow::bail!("down") }, RetryPolicy::Never);
//! assert_eq!(gave_up.unwrap_err().to_string(), "down");
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fmt;

/// Decides whether another attempt is made after a failure.
pub enum RetryPolicy {
    /// Retry until the operation succeeds.
    Always,
    /// Make a single attempt.
    Never,
    /// Allow this many retries, so up to `n + 1` attempts.
    MaxRetries(u32),
    /// Ask a predicate, given the number of retries so far (including the one
    /// about to be made) and the last error.
    When(Box<dyn FnMut(u32, &anyhow::Error) -> bool>),
}

impl RetryPolicy {
    /// Policy backed by a predicate.
    pub fn when<F>(f: F) -> Self
    where
        F: FnMut(u32, &anyhow::Error) -> bool + 'static,
    {
        Self::When(Box::new(f))
    }

    fn should_retry(&mut self, retries: u32, err: &anyhow::Error) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::MaxRetries(max) => retries <= *max,
            Self::When(f) => f(retries, err),
        }
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::Never => f.write_str("Never"),
            Self::MaxRetries(n) => f.debug_tuple("MaxRetries").field(n).finish(),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::Always
    }
}

impl From<bool> for RetryPolicy {
    fn from(retry: bool) -> Self {
        if retry { Self::Always } else { Self::Never }
    }
}

impl From<u32> for RetryPolicy {
    fn from(max: u32) -> Self {
        Self::MaxRetries(max)
    }
}

/// Call `op` with the zero-based attempt number until it returns `Ok` or
/// `policy` declines another attempt.
///
/// # Errors
/// The error of the last attempt, once the policy stops retrying.
pub fn retry<T, F>(op: F, policy: impl Into<RetryPolicy>) -> anyhow::Result<T>
where
    F: FnMut(u32) -> anyhow::Result<T>,
{
    let mut op = op;
    let mut policy = policy.into();
    let mut retries = 0u32;
    loop {
        match op(retries) {
            Ok(value) => return Ok(value),
            Err(err) => {
                retries = retries.saturating_add(1);
                tracing::debug!(attempt = retries, error = %err, "attempt failed");
                if !policy.should_retry(retries, &err) {
                    return Err(err);
                }
            }
        }
    }
}
