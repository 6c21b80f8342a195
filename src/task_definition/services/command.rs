//! Untyped input accepted by the create use-case.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Flat request to create a task definition.
///
/// Fields mirror the wire shape. Absent values are `None` and numbers are
/// wide signed integers; range rules belong to the validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDefinitionCommand {
    /// Unique task name.
    pub name: Option<String>,
    /// Task category.
    pub category: Option<String>,
    /// Task description; required but may be empty.
    pub description: Option<String>,
    /// Initial status text (`ACTIVE`, `INACTIVE`, `DEPRECATED`).
    pub status: Option<String>,
    /// Optional metadata entries.
    #[serde(default)]
    pub metadata: Option<BTreeMap<String, String>>,
    /// HTTP call configuration.
    pub http_config: Option<HttpConfigCommand>,
    /// Retry configuration.
    pub retry_policy: Option<RetryPolicyCommand>,
}

/// HTTP section of [`CreateTaskDefinitionCommand`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfigCommand {
    /// Target URL.
    pub endpoint: Option<String>,
    /// HTTP method text.
    pub http_method: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<i64>,
    /// Optional request headers.
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    /// Optional payload template.
    #[serde(default)]
    pub payload_template: Option<Map<String, Value>>,
}

/// Retry section of [`CreateTaskDefinitionCommand`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicyCommand {
    /// Maximum retry attempts.
    pub max_attempts: Option<i64>,
    /// Backoff delay per attempt, in seconds.
    #[serde(default)]
    pub backoff_seconds: Option<Vec<i64>>,
    /// HTTP status codes that trigger a retry.
    #[serde(default)]
    pub retryable_status_codes: Option<Vec<i64>>,
}

impl CreateTaskDefinitionCommand {
    /// Creates a command with the required top-level fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        http_config: HttpConfigCommand,
        retry_policy: RetryPolicyCommand,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category.into()),
            description: Some(description.into()),
            status: Some(status.into()),
            metadata: None,
            http_config: Some(http_config),
            retry_policy: Some(retry_policy),
        }
    }

    /// Sets metadata entries.
    #[must_use]
    pub fn with_metadata(mut self, metadata: impl IntoIterator<Item = (String, String)>) -> Self {
        self.metadata = Some(metadata.into_iter().collect());
        self
    }

    /// Returns the requested name, or an empty string when absent.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl HttpConfigCommand {
    /// Creates an HTTP section with the required fields.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        http_method: impl Into<String>,
        timeout_seconds: i64,
    ) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            http_method: Some(http_method.into()),
            timeout_seconds: Some(timeout_seconds),
            headers: None,
            payload_template: None,
        }
    }

    /// Sets request headers.
    #[must_use]
    pub fn with_headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers = Some(headers.into_iter().collect());
        self
    }

    /// Sets the payload template.
    #[must_use]
    pub fn with_payload_template(mut self, template: Map<String, Value>) -> Self {
        self.payload_template = Some(template);
        self
    }
}

impl RetryPolicyCommand {
    /// Creates a retry section with only the attempt count.
    #[must_use]
    pub const fn new(max_attempts: i64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff_seconds: None,
            retryable_status_codes: None,
        }
    }

    /// Sets the backoff schedule.
    #[must_use]
    pub fn with_backoff_seconds(mut self, backoff: impl IntoIterator<Item = i64>) -> Self {
        self.backoff_seconds = Some(backoff.into_iter().collect());
        self
    }

    /// Sets the retryable status codes.
    #[must_use]
    pub fn with_retryable_status_codes(mut self, codes: impl IntoIterator<Item = i64>) -> Self {
        self.retryable_status_codes = Some(codes.into_iter().collect());
        self
    }
}
