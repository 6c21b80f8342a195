//! Create-use-case integration tests against the in-memory store.

use super::helpers::{TestService, command_named, repository, service};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use taskdef::task_definition::{
    adapters::memory::InMemoryTaskDefinitionRepository,
    domain::{FailureKind, HttpMethod, TaskDefinition, TaskStatus},
    services::{
        CreateTaskDefinitionCommand, HttpConfigCommand, RetryPolicyCommand,
        TaskDefinitionExistenceQuery, TaskDefinitionService, TaskDefinitionServiceError,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creates_definition_with_retries_disabled(service: TestService) {
    let created = service
        .create(&command_named("send-email"))
        .await
        .expect("creation should succeed");

    assert_eq!(created.status(), TaskStatus::Active);
    assert_eq!(created.task_info().description(), "");
    assert!(!created.retry_policy().retries_enabled());
    assert_eq!(created.id().into_inner().get_version_num(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_sequential_create_names_the_conflict(service: TestService) {
    service
        .create(&command_named("send-email"))
        .await
        .expect("first creation should succeed");

    let err = service
        .create(&command_named("send-email"))
        .await
        .expect_err("second creation must fail");

    assert_eq!(err.kind(), FailureKind::BusinessRule);
    assert!(err.to_string().contains("send-email"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zero_timeout_fails_before_any_store_call(
    repository: Arc<InMemoryTaskDefinitionRepository>,
) {
    let service = TaskDefinitionService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let mut command = command_named("send-email");
    command.http_config = Some(HttpConfigCommand::new(
        "https://api.example.com/send",
        "POST",
        0,
    ));

    let err = service
        .create(&command)
        .await
        .expect_err("zero timeout must fail");

    assert_eq!(err.kind(), FailureKind::StructuralValidation);
    assert!(matches!(err, TaskDefinitionServiceError::InvalidCommand(ref violations)
        if violations.concerns("httpConfig.timeoutSeconds")));
    assert_eq!(
        repository
            .count_active_by_name("send-email")
            .expect("count should succeed"),
        0
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_command_round_trips_through_json(service: TestService) {
    let body = json!({
        "name": "sync_users",
        "category": "crm",
        "description": "Pushes user changes to the CRM",
        "status": "active",
        "metadata": { "owner": "platform" },
        "httpConfig": {
            "endpoint": "https://crm.example.com/users",
            "httpMethod": "put",
            "timeoutSeconds": 120,
            "headers": { "X-Api-Version": "2" },
            "payloadTemplate": { "id": "{{userId}}" }
        },
        "retryPolicy": {
            "maxAttempts": 2,
            "backoffSeconds": [5, 30],
            "retryableStatusCodes": [502, 503, 504]
        }
    });
    let command: CreateTaskDefinitionCommand =
        serde_json::from_value(body).expect("command should deserialize");

    let created = service
        .create(&command)
        .await
        .expect("creation should succeed");

    let http = created.http_config();
    assert_eq!(http.http_method(), HttpMethod::Put);
    assert_eq!(http.timeout_seconds(), 120);
    assert_eq!(
        http.headers().get("X-Api-Version").map(String::as_str),
        Some("2")
    );
    assert!(http.has_payload_template());
    assert_eq!(created.retry_policy().retryable_status_codes(), &[502, 503, 504]);

    let stored = serde_json::to_value(&created).expect("definition should serialize");
    let restored: TaskDefinition =
        serde_json::from_value(stored).expect("definition should deserialize");
    assert_eq!(restored, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_with_long_timeout_passes_bulk_check_only_up_to_cap(service: TestService) {
    let mut command = command_named("poll-status");
    command.http_config = Some(HttpConfigCommand::new(
        "https://api.example.com/status",
        "GET",
        300,
    ));
    command.retry_policy = Some(
        RetryPolicyCommand::new(1)
            .with_backoff_seconds([10])
            .with_retryable_status_codes([503]),
    );

    let created = service
        .create(&command)
        .await
        .expect("300 seconds is allowed for GET");

    assert_eq!(created.http_config().timeout_seconds(), 300);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn existence_query_reads_the_shared_store(
    repository: Arc<InMemoryTaskDefinitionRepository>,
) {
    let service = TaskDefinitionService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let query = TaskDefinitionExistenceQuery::new(repository);

    service
        .create(&command_named("send-email"))
        .await
        .expect("creation should succeed");

    assert!(query.execute("send-email").await.expect("query should succeed"));
    assert!(!query.execute("send-sms").await.expect("query should succeed"));
}
