//! Concurrent creators racing for the same task name.

use super::helpers::{GatedRepository, command_named};
use mockable::DefaultClock;
use std::sync::Arc;
use taskdef::task_definition::{
    adapters::memory::InMemoryTaskDefinitionRepository,
    domain::{FailureKind, TaskDefinition},
    services::{TaskDefinitionService, TaskDefinitionServiceError},
};

const RACED_NAME: &str = "race-task";

type Outcome = Result<TaskDefinition, TaskDefinitionServiceError>;

async fn race_two_creators(store: Arc<GatedRepository>) -> (Outcome, Outcome) {
    let clock = Arc::new(DefaultClock);
    let first = {
        let racer = TaskDefinitionService::new(Arc::clone(&store), Arc::clone(&clock));
        tokio::spawn(async move { racer.create(&command_named(RACED_NAME)).await })
    };
    let second = {
        let racer = TaskDefinitionService::new(store, clock);
        tokio::spawn(async move { racer.create(&command_named(RACED_NAME)).await })
    };
    (
        first.await.expect("first creator should not panic"),
        second.await.expect("second creator should not panic"),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn store_without_constraint_lets_both_creators_win() {
    let store = Arc::new(GatedRepository::new(
        InMemoryTaskDefinitionRepository::without_active_name_constraint(),
        2,
    ));

    let (first, second) = race_two_creators(Arc::clone(&store)).await;

    assert!(first.is_ok(), "first creator failed: {first:?}");
    assert!(second.is_ok(), "second creator failed: {second:?}");
    assert_eq!(
        store
            .inner()
            .count_active_by_name(RACED_NAME)
            .expect("count should succeed"),
        2
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn enforcing_store_admits_exactly_one_creator() {
    let store = Arc::new(GatedRepository::new(
        InMemoryTaskDefinitionRepository::new(),
        2,
    ));

    let (first, second) = race_two_creators(Arc::clone(&store)).await;

    let outcomes = [first, second];
    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let conflicts: Vec<_> = outcomes
        .iter()
        .filter_map(|outcome| outcome.as_ref().err())
        .collect();

    assert_eq!(successes, 1);
    assert_eq!(conflicts.len(), 1);
    for conflict in conflicts {
        assert!(matches!(
            conflict,
            TaskDefinitionServiceError::DuplicateActiveName(name) if name == RACED_NAME
        ));
        assert_eq!(conflict.kind(), FailureKind::BusinessRule);
    }
    assert_eq!(
        store
            .inner()
            .count_active_by_name(RACED_NAME)
            .expect("count should succeed"),
        1
    );
}
