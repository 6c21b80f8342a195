//! Status transition integration tests against the in-memory store.

use super::helpers::{TestService, command_named, service};
use rstest::rstest;
use taskdef::task_definition::{
    domain::TaskStatus,
    services::{TaskDefinitionServiceError, TaskDefinitionSummary},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deprecating_frees_the_name(service: TestService) {
    let original = service
        .create(&command_named("send-email"))
        .await
        .expect("creation should succeed");

    let deprecated = service
        .deprecate(original.id())
        .await
        .expect("deprecation should succeed");
    assert_eq!(deprecated.status(), TaskStatus::Deprecated);
    assert!(deprecated.audit().updated_at() >= original.audit().updated_at());

    let replacement = service
        .create(&command_named("send-email"))
        .await
        .expect("name should be free");

    let active = service
        .find_active_by_name("send-email")
        .await
        .expect("lookup should succeed")
        .expect("replacement should be active");
    assert_eq!(active.id(), replacement.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reactivating_the_only_holder_succeeds(service: TestService) {
    let created = service
        .create(&command_named("send-email"))
        .await
        .expect("creation should succeed");
    service
        .deactivate(created.id())
        .await
        .expect("deactivation should succeed");

    let reactivated = service
        .activate(created.id())
        .await
        .expect("activation should succeed");

    assert!(reactivated.is_active());
    assert_eq!(reactivated.audit().created_at(), created.audit().created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reactivation_conflicts_with_newer_holder(service: TestService) {
    let older = service
        .create(&command_named("send-email"))
        .await
        .expect("creation should succeed");
    service
        .deactivate(older.id())
        .await
        .expect("deactivation should succeed");
    service
        .create(&command_named("send-email"))
        .await
        .expect("replacement should succeed");

    let err = service
        .activate(older.id())
        .await
        .expect_err("name is taken");

    assert!(matches!(
        err,
        TaskDefinitionServiceError::DuplicateActiveName(ref name) if name == "send-email"
    ));
    let stored = service
        .find_by_id(older.id())
        .await
        .expect("lookup should succeed")
        .expect("older definition should still exist");
    assert_eq!(stored.status(), TaskStatus::Inactive);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summaries_report_current_status(service: TestService) {
    let created = service
        .create(&command_named("send-email"))
        .await
        .expect("creation should succeed");
    let deactivated = service
        .deactivate(created.id())
        .await
        .expect("deactivation should succeed");

    let summary = TaskDefinitionSummary::from(&deactivated);

    assert_eq!(summary.status, "INACTIVE");
    assert_eq!(summary.name, "send-email");
}
