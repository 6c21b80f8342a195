//! Shared world state for task definition creation BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdef::task_definition::{
    adapters::memory::InMemoryTaskDefinitionRepository,
    domain::TaskDefinition,
    services::{
        CreateTaskDefinitionCommand, HttpConfigCommand, RetryPolicyCommand,
        TaskDefinitionExistenceQuery, TaskDefinitionService, TaskDefinitionServiceError,
    },
};

/// Service type used by the BDD world.
pub type TestTaskDefinitionService =
    TaskDefinitionService<InMemoryTaskDefinitionRepository, DefaultClock>;

/// Scenario world for task definition creation behaviour tests.
pub struct TaskDefinitionWorld {
    /// The creation service under test.
    pub service: TestTaskDefinitionService,
    /// Read-only existence query over the same store.
    pub query: TaskDefinitionExistenceQuery<InMemoryTaskDefinitionRepository>,
    /// Command prepared by the given steps.
    pub pending_command: Option<CreateTaskDefinitionCommand>,
    /// Last successfully created definition.
    pub last_created: Option<TaskDefinition>,
    /// Result of the last submission.
    pub last_create_result: Option<Result<TaskDefinition, TaskDefinitionServiceError>>,
}

impl TaskDefinitionWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskDefinitionRepository::new());
        Self {
            service: TaskDefinitionService::new(Arc::clone(&repository), Arc::new(DefaultClock)),
            query: TaskDefinitionExistenceQuery::new(repository),
            pending_command: None,
            last_created: None,
            last_create_result: None,
        }
    }

    /// Returns the prepared command.
    ///
    /// # Errors
    ///
    /// Returns an error when no given step prepared a command.
    pub fn pending(&mut self) -> Result<&mut CreateTaskDefinitionCommand, eyre::Report> {
        self.pending_command
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no pending command in scenario world"))
    }
}

impl Default for TaskDefinitionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskDefinitionWorld {
    TaskDefinitionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a valid command with retries disabled.
#[must_use]
pub fn build_command(name: &str, category: &str) -> CreateTaskDefinitionCommand {
    CreateTaskDefinitionCommand::new(
        name,
        category,
        "",
        "ACTIVE",
        HttpConfigCommand::new("https://api.example.com/send", "POST", 30),
        RetryPolicyCommand::new(0),
    )
}
