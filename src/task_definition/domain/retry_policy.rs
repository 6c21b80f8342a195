//! Retry configuration for a task definition.

use super::TaskDefinitionDomainError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Retry behaviour applied when a task call fails.
///
/// With `max_attempts == 0` retries are disabled and the backoff schedule and
/// status code list are stored as supplied without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RetryPolicyFields")]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_seconds: Vec<i64>,
    retryable_status_codes: Vec<i64>,
}

#[derive(Deserialize)]
struct RetryPolicyFields {
    max_attempts: i64,
    #[serde(default)]
    backoff_seconds: Option<Vec<i64>>,
    #[serde(default)]
    retryable_status_codes: Option<Vec<i64>>,
}

impl TryFrom<RetryPolicyFields> for RetryPolicy {
    type Error = TaskDefinitionDomainError;

    fn try_from(fields: RetryPolicyFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.max_attempts,
            fields.backoff_seconds,
            fields.retryable_status_codes,
        )
    }
}

impl RetryPolicy {
    /// Upper bound for `max_attempts`.
    pub const MAX_ATTEMPTS_LIMIT: u32 = 20;
    /// Accepted range for retryable HTTP status codes.
    pub const STATUS_CODE_RANGE: RangeInclusive<i64> = 100..=599;

    /// Creates a validated retry policy.
    ///
    /// `None` models an absent schedule or code list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::MaxAttemptsOutOfRange`] when
    /// `max_attempts` is outside `0..=20`. When retries are enabled, also
    /// returns [`TaskDefinitionDomainError::MissingBackoff`],
    /// [`TaskDefinitionDomainError::BackoffTooShort`],
    /// [`TaskDefinitionDomainError::NegativeBackoff`],
    /// [`TaskDefinitionDomainError::MissingRetryableStatusCodes`], or
    /// [`TaskDefinitionDomainError::InvalidRetryableStatusCode`].
    pub fn new(
        max_attempts: i64,
        backoff_seconds: Option<Vec<i64>>,
        retryable_status_codes: Option<Vec<i64>>,
    ) -> Result<Self, TaskDefinitionDomainError> {
        let attempts = u32::try_from(max_attempts)
            .ok()
            .filter(|attempts| *attempts <= Self::MAX_ATTEMPTS_LIMIT)
            .ok_or(TaskDefinitionDomainError::MaxAttemptsOutOfRange(max_attempts))?;

        let backoff = backoff_seconds.unwrap_or_default();
        let codes = retryable_status_codes.unwrap_or_default();

        if attempts > 0 {
            check_backoff(&backoff, attempts)?;
            check_status_codes(&codes, attempts)?;
        }

        Ok(Self {
            max_attempts: attempts,
            backoff_seconds: backoff,
            retryable_status_codes: codes,
        })
    }

    /// Returns a policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 0,
            backoff_seconds: Vec::new(),
            retryable_status_codes: Vec::new(),
        }
    }

    /// Returns the maximum number of retry attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the backoff delay, in seconds, for each attempt.
    #[must_use]
    pub fn backoff_seconds(&self) -> &[i64] {
        &self.backoff_seconds
    }

    /// Returns the HTTP status codes that trigger a retry.
    #[must_use]
    pub fn retryable_status_codes(&self) -> &[i64] {
        &self.retryable_status_codes
    }

    /// Returns `true` when at least one retry is allowed.
    #[must_use]
    pub const fn retries_enabled(&self) -> bool {
        self.max_attempts > 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

fn check_backoff(backoff: &[i64], max_attempts: u32) -> Result<(), TaskDefinitionDomainError> {
    if backoff.is_empty() {
        return Err(TaskDefinitionDomainError::MissingBackoff { max_attempts });
    }
    let covers_attempts = u32::try_from(backoff.len()).map_or(true, |len| len >= max_attempts);
    if !covers_attempts {
        return Err(TaskDefinitionDomainError::BackoffTooShort {
            length: backoff.len(),
            max_attempts,
        });
    }
    if let Some((index, value)) = backoff
        .iter()
        .copied()
        .enumerate()
        .find(|(_, value)| *value < 0)
    {
        return Err(TaskDefinitionDomainError::NegativeBackoff { index, value });
    }
    Ok(())
}

fn check_status_codes(codes: &[i64], max_attempts: u32) -> Result<(), TaskDefinitionDomainError> {
    if codes.is_empty() {
        return Err(TaskDefinitionDomainError::MissingRetryableStatusCodes { max_attempts });
    }
    if let Some((index, code)) = codes
        .iter()
        .copied()
        .enumerate()
        .find(|(_, code)| !RetryPolicy::STATUS_CODE_RANGE.contains(code))
    {
        return Err(TaskDefinitionDomainError::InvalidRetryableStatusCode { index, code });
    }
    Ok(())
}
