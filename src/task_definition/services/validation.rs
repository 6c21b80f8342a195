//! Bulk validation of create commands.
//!
//! Value objects fail fast on their first broken rule. Callers submitting a
//! command get every problem at once instead, so these rules run over the
//! whole command and collect one [`FieldViolation`] per broken rule before
//! anything else happens.

use super::command::{CreateTaskDefinitionCommand, HttpConfigCommand, RetryPolicyCommand};
use crate::task_definition::domain::{
    Endpoint, HttpConfig, RetryPolicy, TaskDefinitionDomainError, TaskInfo, TaskName, TaskStatus,
};
use std::fmt;
use thiserror::Error;

/// A single broken rule, tagged with the wire path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    error: TaskDefinitionDomainError,
}

impl FieldViolation {
    /// Creates a violation for `field`.
    #[must_use]
    pub const fn new(field: &'static str, error: TaskDefinitionDomainError) -> Self {
        Self { field, error }
    }

    /// Returns the wire path of the offending field, e.g.
    /// `httpConfig.timeoutSeconds`.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the broken rule.
    #[must_use]
    pub const fn error(&self) -> &TaskDefinitionDomainError {
        &self.error
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Every violation found in a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} validation error(s): {}", .0.len(), format_violations(.0))]
pub struct CommandViolations(Vec<FieldViolation>);

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CommandViolations {
    /// Returns the individual violations in discovery order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when at least one violation concerns `field`.
    #[must_use]
    pub fn concerns(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

/// Validates every field-level rule of a create command.
///
/// # Errors
///
/// Returns [`CommandViolations`] holding every broken rule when at least one
/// rule fails.
pub fn validate_command(command: &CreateTaskDefinitionCommand) -> Result<(), CommandViolations> {
    let mut violations = Violations::default();

    check_name(&mut violations, command.name.as_deref());
    check_category(&mut violations, command.category.as_deref());
    check_description(&mut violations, command.description.as_deref());
    check_status(&mut violations, command.status.as_deref());

    match command.http_config.as_ref() {
        Some(http) => check_http_config(&mut violations, http),
        None => violations.missing("httpConfig"),
    }

    match command.retry_policy.as_ref() {
        Some(retry) => check_retry_policy(&mut violations, retry),
        None => violations.missing("retryPolicy"),
    }

    violations.into_result()
}

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: &'static str, error: TaskDefinitionDomainError) {
        self.0.push(FieldViolation::new(field, error));
    }

    fn missing(&mut self, field: &'static str) {
        self.push(field, TaskDefinitionDomainError::MissingField(field));
    }

    fn into_result(self) -> Result<(), CommandViolations> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CommandViolations(self.0))
        }
    }
}

fn check_name(violations: &mut Violations, name: Option<&str>) {
    let Some(value) = name else {
        violations.missing("name");
        return;
    };
    if value.trim().is_empty() {
        violations.push("name", TaskDefinitionDomainError::EmptyTaskName);
    }
    if let Err(err) = TaskName::check_length(value) {
        violations.push("name", err);
    }
    if let Err(err) = TaskName::check_pattern(value) {
        violations.push("name", err);
    }
}

fn check_category(violations: &mut Violations, category: Option<&str>) {
    let Some(value) = category else {
        violations.missing("category");
        return;
    };
    if value.trim().is_empty() {
        violations.push("category", TaskDefinitionDomainError::EmptyCategory);
    }
    let length = value.chars().count();
    if !(TaskInfo::CATEGORY_MIN_LENGTH..=TaskInfo::CATEGORY_MAX_LENGTH).contains(&length) {
        violations.push("category", TaskDefinitionDomainError::CategoryLength(length));
    }
}

fn check_description(violations: &mut Violations, description: Option<&str>) {
    let Some(value) = description else {
        violations.missing("description");
        return;
    };
    if let Err(err) = TaskInfo::check_description(value) {
        violations.push("description", err);
    }
}

fn check_status(violations: &mut Violations, status: Option<&str>) {
    let Some(value) = status else {
        violations.missing("status");
        return;
    };
    if let Err(err) = TaskStatus::try_from(value) {
        violations.push("status", err);
    }
}

fn check_http_config(violations: &mut Violations, http: &HttpConfigCommand) {
    match http.endpoint.as_deref() {
        Some(endpoint) => check_endpoint(violations, endpoint),
        None => violations.missing("httpConfig.endpoint"),
    }

    match http.http_method.as_deref() {
        Some(method) if method.trim().is_empty() => violations.push(
            "httpConfig.httpMethod",
            TaskDefinitionDomainError::UnknownHttpMethod(method.to_owned()),
        ),
        Some(_) => {}
        None => violations.missing("httpConfig.httpMethod"),
    }

    match http.timeout_seconds {
        Some(timeout) if timeout < i64::from(HttpConfig::MIN_TIMEOUT_SECONDS) => violations.push(
            "httpConfig.timeoutSeconds",
            TaskDefinitionDomainError::TimeoutTooShort(timeout),
        ),
        Some(timeout) if timeout > i64::from(HttpConfig::MAX_GET_TIMEOUT_SECONDS) => violations
            .push(
                "httpConfig.timeoutSeconds",
                TaskDefinitionDomainError::TimeoutTooLong(timeout),
            ),
        Some(_) => {}
        None => violations.missing("httpConfig.timeoutSeconds"),
    }
}

fn check_endpoint(violations: &mut Violations, endpoint: &str) {
    if endpoint.trim().is_empty() {
        violations.push("httpConfig.endpoint", TaskDefinitionDomainError::EmptyEndpoint);
    }
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        violations.push(
            "httpConfig.endpoint",
            TaskDefinitionDomainError::MalformedEndpoint {
                url: endpoint.to_owned(),
                reason: "must start with http:// or https://".to_owned(),
            },
        );
    }
    let length = endpoint.chars().count();
    if length > Endpoint::MAX_LENGTH {
        violations.push(
            "httpConfig.endpoint",
            TaskDefinitionDomainError::EndpointTooLong(length),
        );
    }
}

fn check_retry_policy(violations: &mut Violations, retry: &RetryPolicyCommand) {
    let Some(max_attempts) = retry.max_attempts else {
        violations.missing("retryPolicy.maxAttempts");
        return;
    };

    let within_limit = u32::try_from(max_attempts)
        .ok()
        .filter(|value| *value <= RetryPolicy::MAX_ATTEMPTS_LIMIT);
    let Some(attempts) = within_limit else {
        violations.push(
            "retryPolicy.maxAttempts",
            TaskDefinitionDomainError::MaxAttemptsOutOfRange(max_attempts),
        );
        return;
    };

    if attempts == 0 {
        return;
    }
    if retry.backoff_seconds.as_ref().is_none_or(Vec::is_empty) {
        violations.push(
            "retryPolicy.backoffSeconds",
            TaskDefinitionDomainError::MissingBackoff {
                max_attempts: attempts,
            },
        );
    }
    if retry.retryable_status_codes.as_ref().is_none_or(Vec::is_empty) {
        violations.push(
            "retryPolicy.retryableStatusCodes",
            TaskDefinitionDomainError::MissingRetryableStatusCodes {
                max_attempts: attempts,
            },
        );
    }
}
