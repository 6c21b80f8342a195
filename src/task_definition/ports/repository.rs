//! Repository ports for loading and saving task definitions.

use crate::task_definition::domain::{FailureKind, TaskDefinition, TaskDefinitionId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task definition repository operations.
pub type TaskDefinitionRepositoryResult<T> = Result<T, TaskDefinitionRepositoryError>;

/// Read-side persistence contract.
#[async_trait]
pub trait TaskDefinitionReader: Send + Sync {
    /// Returns whether an active definition with `name` exists.
    async fn exists_active_by_name(&self, name: &str) -> TaskDefinitionRepositoryResult<bool>;

    /// Finds the active definition with `name`.
    ///
    /// Returns `None` when no active definition has the given name.
    async fn find_active_by_name(
        &self,
        name: &str,
    ) -> TaskDefinitionRepositoryResult<Option<TaskDefinition>>;

    /// Finds a definition by identifier, whatever its status.
    ///
    /// Returns `None` when the definition does not exist.
    async fn find_by_id(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionRepositoryResult<Option<TaskDefinition>>;
}

/// Write-side persistence contract.
#[async_trait]
pub trait TaskDefinitionWriter: Send + Sync {
    /// Inserts or updates a definition and returns its stored form.
    ///
    /// # Errors
    ///
    /// Implementations backed by a store that enforces unique active names
    /// return [`TaskDefinitionRepositoryError::DuplicateActiveName`] when
    /// another active definition already uses the name.
    async fn save(
        &self,
        definition: &TaskDefinition,
    ) -> TaskDefinitionRepositoryResult<TaskDefinition>;
}

/// Errors returned by task definition repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskDefinitionRepositoryError {
    /// Another active definition already uses the name.
    #[error("an active task definition named '{0}' already exists")]
    DuplicateActiveName(String),

    /// The definition was not found.
    #[error("task definition not found: {0}")]
    NotFound(TaskDefinitionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskDefinitionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::DuplicateActiveName(_) => FailureKind::BusinessRule,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::Persistence(_) => FailureKind::Persistence,
        }
    }
}
