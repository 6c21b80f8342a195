//! Read-only query answering whether a name is currently in use.

use super::error::TaskDefinitionServiceResult;
use crate::task_definition::{domain::TaskDefinitionDomainError, ports::TaskDefinitionReader};
use std::sync::Arc;
use tracing::debug;

/// Resolves whether an active task definition exists for a name.
#[derive(Clone)]
pub struct TaskDefinitionExistenceQuery<R>
where
    R: TaskDefinitionReader,
{
    reader: Arc<R>,
}

impl<R> TaskDefinitionExistenceQuery<R>
where
    R: TaskDefinitionReader,
{
    /// Creates a new existence query.
    #[must_use]
    pub const fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }

    /// Returns whether an active definition named `name` exists.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskDefinitionServiceError::Domain`] when the name is
    /// blank, or [`super::TaskDefinitionServiceError::Repository`] when the
    /// lookup fails.
    pub async fn execute(&self, name: &str) -> TaskDefinitionServiceResult<bool> {
        debug!(name, "resolving task definition");
        if name.trim().is_empty() {
            return Err(TaskDefinitionDomainError::EmptyTaskName.into());
        }
        Ok(self.reader.exists_active_by_name(name).await?)
    }
}
