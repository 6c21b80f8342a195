//! Error types for task definition domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Classification shared by every error surfaced from the task definition
/// core.
///
/// Boundary layers map a kind onto an external status; the core never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A value object rejected its input during construction.
    StructuralValidation,
    /// An already-built aggregate refused an invalid component.
    ///
    /// Aggregate components are owned, validated values, so the domain never
    /// raises this kind itself.
    AggregateInvariant,
    /// A cross-instance rule (unique active name) was violated.
    BusinessRule,
    /// A lookup that callers asked to be mandatory found nothing.
    NotFound,
    /// A collaborator failed for reasons unrelated to the domain.
    Persistence,
}

/// Errors returned while constructing task definition domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDefinitionDomainError {
    /// A required input field was absent.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The identifier text is empty after trimming.
    #[error("task definition identifier must not be blank")]
    EmptyIdentifier,

    /// The identifier text is not a canonical UUID.
    #[error("task definition identifier '{0}' is not a valid UUID")]
    InvalidIdentifier(String),

    /// The task name is blank.
    #[error("task name must not be blank")]
    EmptyTaskName,

    /// The task name length falls outside the accepted range.
    #[error("task name must be between 3 and 100 characters, got {0}")]
    TaskNameLength(usize),

    /// The task name contains characters outside `[A-Za-z0-9_-]`.
    #[error(
        "task name '{0}' contains invalid characters (only letters, digits, hyphens and underscores allowed)"
    )]
    InvalidTaskName(String),

    /// The category is blank.
    #[error("category must not be blank")]
    EmptyCategory,

    /// The category length falls outside the accepted range.
    #[error("category must be between 2 and 50 characters, got {0}")]
    CategoryLength(usize),

    /// The description exceeds the storage limit.
    #[error("description cannot exceed 500 characters, got {0}")]
    DescriptionTooLong(usize),

    /// The endpoint URL is blank.
    #[error("endpoint URL must not be blank")]
    EmptyEndpoint,

    /// The endpoint URL exceeds the maximum length.
    #[error("endpoint URL cannot exceed 2048 characters, got {0}")]
    EndpointTooLong(usize),

    /// The endpoint URL could not be parsed as an absolute URI.
    #[error("endpoint must be a valid URL: {url} ({reason})")]
    MalformedEndpoint {
        /// The offending URL after normalisation.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The endpoint URL uses a scheme other than HTTP or HTTPS.
    #[error("endpoint protocol must be http or https, but was '{0}'")]
    UnsupportedEndpointScheme(String),

    /// The endpoint URL has no usable host.
    #[error("endpoint must have a valid host: {0}")]
    MissingEndpointHost(String),

    /// The text does not name a supported HTTP method.
    #[error("HTTP method '{0}' not found, valid values are: GET|POST|PUT|DELETE")]
    UnknownHttpMethod(String),

    /// The text does not name a task status.
    #[error("status '{0}' not found, valid values are: ACTIVE|INACTIVE|DEPRECATED")]
    UnknownTaskStatus(String),

    /// The timeout is below one second.
    #[error("timeout must be at least 1 second, got {0}")]
    TimeoutTooShort(i64),

    /// The requested timeout exceeds five minutes.
    #[error("timeout cannot exceed 300 seconds, got {0}")]
    TimeoutTooLong(i64),

    /// The timeout does not fit the supported range.
    #[error("timeout of {0} seconds is out of range")]
    TimeoutOutOfRange(i64),

    /// A GET request declares a timeout longer than five minutes.
    #[error("GET requests must not have a timeout exceeding 300 seconds, got {0}")]
    GetTimeoutTooLong(u32),

    /// A header key is blank.
    #[error("header key must not be blank")]
    EmptyHeaderKey,

    /// A header key contains characters outside `[A-Za-z0-9-]`.
    #[error("header key '{0}' contains invalid characters")]
    InvalidHeaderKey(String),

    /// The retry attempt count falls outside `0..=20`.
    #[error("maxAttempts must be between 0 and 20, got {0}")]
    MaxAttemptsOutOfRange(i64),

    /// Retries are enabled but no backoff schedule was supplied.
    #[error("backoffSeconds must not be empty when maxAttempts is {max_attempts}")]
    MissingBackoff {
        /// Configured attempt count.
        max_attempts: u32,
    },

    /// The backoff schedule is shorter than the attempt count.
    #[error("backoffSeconds length ({length}) cannot be less than maxAttempts ({max_attempts})")]
    BackoffTooShort {
        /// Supplied schedule length.
        length: usize,
        /// Configured attempt count.
        max_attempts: u32,
    },

    /// A backoff entry is negative.
    #[error("backoffSeconds at index {index} cannot be negative: {value}")]
    NegativeBackoff {
        /// Position of the offending entry.
        index: usize,
        /// The offending entry.
        value: i64,
    },

    /// Retries are enabled but no retryable status codes were supplied.
    #[error("retryableStatusCodes must not be empty when maxAttempts is {max_attempts}")]
    MissingRetryableStatusCodes {
        /// Configured attempt count.
        max_attempts: u32,
    },

    /// A retryable status code falls outside `100..=599`.
    #[error("invalid HTTP status code at index {index}: {code}, valid range is 100-599")]
    InvalidRetryableStatusCode {
        /// Position of the offending entry.
        index: usize,
        /// The offending entry.
        code: i64,
    },

    /// The audit record would place `updated_at` before `created_at`.
    #[error("updatedAt ({updated_at}) cannot be before createdAt ({created_at})")]
    AuditOutOfOrder {
        /// Creation timestamp.
        created_at: DateTime<Utc>,
        /// Rejected update timestamp.
        updated_at: DateTime<Utc>,
    },
}

impl TaskDefinitionDomainError {
    /// Returns the failure kind. Every domain error is raised while a value
    /// is being constructed.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        FailureKind::StructuralValidation
    }
}
