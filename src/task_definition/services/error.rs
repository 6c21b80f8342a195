//! Error type shared by task definition use-cases.

use super::validation::CommandViolations;
use crate::task_definition::{
    domain::{FailureKind, TaskDefinitionDomainError, TaskDefinitionId},
    ports::TaskDefinitionRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task definition operations.
#[derive(Debug, Error)]
pub enum TaskDefinitionServiceError {
    /// The command broke one or more field rules; all of them are listed.
    #[error(transparent)]
    InvalidCommand(#[from] CommandViolations),

    /// A value object or the aggregate rejected its input.
    #[error(transparent)]
    Domain(#[from] TaskDefinitionDomainError),

    /// Another active definition already uses the name.
    #[error("an active task definition named '{0}' already exists")]
    DuplicateActiveName(String),

    /// No definition has the requested identifier.
    #[error("task definition not found: {0}")]
    NotFound(TaskDefinitionId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskDefinitionRepositoryError),
}

impl TaskDefinitionServiceError {
    /// Classifies the error so a boundary layer can map it.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidCommand(_) => FailureKind::StructuralValidation,
            Self::Domain(err) => err.kind(),
            Self::DuplicateActiveName(_) => FailureKind::BusinessRule,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::Repository(err) => err.kind(),
        }
    }
}

impl From<TaskDefinitionRepositoryError> for TaskDefinitionServiceError {
    /// The store's conflict signal becomes [`Self::DuplicateActiveName`],
    /// the same failure the up-front existence check raises.
    fn from(err: TaskDefinitionRepositoryError) -> Self {
        match err {
            TaskDefinitionRepositoryError::DuplicateActiveName(name) => {
                Self::DuplicateActiveName(name)
            }
            TaskDefinitionRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task definition service operations.
pub type TaskDefinitionServiceResult<T> = Result<T, TaskDefinitionServiceError>;
