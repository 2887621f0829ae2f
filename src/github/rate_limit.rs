//! Rate limit information from GitHub API responses.
//!
//! The search endpoint rejects requests with 403/429 once the quota is
//! spent, but the rejection body does not carry the reset time. The
//! dedicated `/rate_limit` endpoint does, and this module captures what it
//! reports so the search loop can size its backoff.

use std::time::{SystemTime, UNIX_EPOCH};

/// Rate limit state reported by the GitHub `/rate_limit` endpoint.
///
/// # Example
///
/// ```
/// use standup::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(30, 0, 1_700_000_000);
/// assert!(info.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window.
    limit: u32,
    /// Remaining requests in the current window.
    remaining: u32,
    /// Unix timestamp when the rate limit resets.
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit info instance.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Returns the maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the remaining requests in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true if the rate limit has been exhausted.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Seconds until the reset, measured from `now` (Unix seconds).
    ///
    /// Returns 0 when the reset time has already passed, so a stale reset
    /// never produces a negative wait.
    #[must_use]
    pub const fn seconds_until_reset_at(&self, now: u64) -> u64 {
        self.reset_at.saturating_sub(now)
    }

    /// Seconds until the reset, measured from the current system time.
    ///
    /// Returns 0 if the reset time has already passed or if the system time
    /// cannot be determined.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        self.seconds_until_reset_at(now)
    }
}
