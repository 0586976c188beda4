//! Retry policy for manifest inspection
//!
//! Registries and engines fail transiently, so every inspection is attempted
//! up to [`RetryPolicy::max_attempts`] times before the error is returned.
//! There is no backoff between attempts.

use super::{ContainerEngine, ManifestInspector};
use crate::domain::ArchitecturePlatform;
use crate::error::Result;

/// Default number of attempts: the first call plus one retry
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// How many times an operation is attempted before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    /// Create a policy; at least one attempt is always made
    #[cfg(test)]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Run `op` until it succeeds or the attempts are used up
    ///
    /// `op` receives the 1-based attempt number. The error of the last
    /// attempt is returned.
    pub fn run<T>(&self, mut op: impl FnMut(u32) -> Result<T>) -> Result<T> {
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts => {
                    tracing::warn!(
                        "Attempt {}/{} failed: {}",
                        attempt,
                        self.max_attempts,
                        err
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Inspector decorator applying a [`RetryPolicy`]
#[derive(Debug, Clone)]
pub struct RetryingInspector<I> {
    inner: I,
    policy: RetryPolicy,
}

impl<I: ManifestInspector> RetryingInspector<I> {
    pub fn new(inner: I, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<I: ManifestInspector> ManifestInspector for RetryingInspector<I> {
    fn inspect(&self, image: &str, engine: ContainerEngine) -> Result<Vec<ArchitecturePlatform>> {
        self.policy.run(|attempt| {
            if attempt > 1 {
                tracing::debug!("Retrying manifest inspect for {}", image);
            }
            self.inner.inspect(image, engine)
        })
    }
}
