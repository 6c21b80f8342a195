//! Builds task definition aggregates from raw commands.

use super::command::{CreateTaskDefinitionCommand, HttpConfigCommand, RetryPolicyCommand};
use crate::task_definition::domain::{
    Endpoint, HttpConfig, HttpMethod, RetryPolicy, TaskDefinition, TaskDefinitionDomainError,
    TaskInfo, TaskStatus,
};
use mockable::Clock;

/// Translates raw command fields into value objects and assembles a new
/// [`TaskDefinition`].
///
/// Only structural rules fire here; name uniqueness is the caller's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskDefinitionFactory;

impl TaskDefinitionFactory {
    /// Creates a factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds a new aggregate from `command`.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskDefinitionDomainError`] raised while building
    /// a value object, or [`TaskDefinitionDomainError::MissingField`] when a
    /// required section is absent.
    pub fn create_from(
        &self,
        command: &CreateTaskDefinitionCommand,
        clock: &impl Clock,
    ) -> Result<TaskDefinition, TaskDefinitionDomainError> {
        let task_info = TaskInfo::new(
            required(command.name.as_deref(), "name")?,
            required(command.category.as_deref(), "category")?,
            required(command.description.as_deref(), "description")?,
        )?;
        let status = TaskStatus::try_from(required(command.status.as_deref(), "status")?)?;
        let http_config = build_http_config(
            command
                .http_config
                .as_ref()
                .ok_or(TaskDefinitionDomainError::MissingField("httpConfig"))?,
        )?;
        let retry_policy = build_retry_policy(
            command
                .retry_policy
                .as_ref()
                .ok_or(TaskDefinitionDomainError::MissingField("retryPolicy"))?,
        )?;

        Ok(TaskDefinition::create_new(
            task_info,
            status,
            command.metadata.clone().unwrap_or_default(),
            http_config,
            retry_policy,
            clock,
        ))
    }
}

fn build_http_config(
    command: &HttpConfigCommand,
) -> Result<HttpConfig, TaskDefinitionDomainError> {
    let endpoint = Endpoint::of(required(
        command.endpoint.as_deref(),
        "httpConfig.endpoint",
    )?)?;
    let http_method = HttpMethod::try_from(required(
        command.http_method.as_deref(),
        "httpConfig.httpMethod",
    )?)?;
    let timeout_seconds = command
        .timeout_seconds
        .ok_or(TaskDefinitionDomainError::MissingField(
            "httpConfig.timeoutSeconds",
        ))?;

    Ok(HttpConfig::new(endpoint, http_method, timeout_seconds)?
        .with_headers(command.headers.clone().unwrap_or_default())?
        .with_payload_template(command.payload_template.clone().unwrap_or_default()))
}

fn build_retry_policy(
    command: &RetryPolicyCommand,
) -> Result<RetryPolicy, TaskDefinitionDomainError> {
    let max_attempts = command
        .max_attempts
        .ok_or(TaskDefinitionDomainError::MissingField(
            "retryPolicy.maxAttempts",
        ))?;
    RetryPolicy::new(
        max_attempts,
        command.backoff_seconds.clone(),
        command.retryable_status_codes.clone(),
    )
}

fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, TaskDefinitionDomainError> {
    value.ok_or(TaskDefinitionDomainError::MissingField(field))
}
