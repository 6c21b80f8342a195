//! Unit tests for the task definition module.


use crate::task_definition::services::{
    CreateTaskDefinitionCommand, HttpConfigCommand, RetryPolicyCommand,
};

/// A command that passes every rule.
fn valid_command() -> CreateTaskDefinitionCommand {
    CreateTaskDefinitionCommand::new(
        "send-email",
        "notifications",
        "Sends transactional email",
        "ACTIVE",
        HttpConfigCommand::new("https://api.example.com/send", "POST", 30),
        RetryPolicyCommand::new(3)
            .with_backoff_seconds([1, 5, 30])
            .with_retryable_status_codes([500, 503]),
    )
}
