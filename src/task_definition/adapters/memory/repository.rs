//! In-memory repository for task definitions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::task_definition::{
    domain::{TaskDefinition, TaskDefinitionId},
    ports::{
        TaskDefinitionReader, TaskDefinitionRepositoryError, TaskDefinitionRepositoryResult,
        TaskDefinitionWriter,
    },
};

/// Thread-safe in-memory task definition repository.
///
/// By default the store rejects saving an active definition whose name is
/// already held by a different active definition, mirroring a unique index
/// on `(name, status = ACTIVE)`.
#[derive(Debug, Clone)]
pub struct InMemoryTaskDefinitionRepository {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug)]
struct InMemoryState {
    definitions: HashMap<TaskDefinitionId, TaskDefinition>,
    unique_active_names: bool,
}

impl InMemoryTaskDefinitionRepository {
    /// Creates an empty repository that enforces unique active names.
    #[must_use]
    pub fn new() -> Self {
        Self::with_constraint(true)
    }

    /// Creates an empty repository without the unique active name
    /// constraint.
    ///
    /// Concurrent creators racing past the existence check can then both
    /// persist a definition with the same name.
    #[must_use]
    pub fn without_active_name_constraint() -> Self {
        Self::with_constraint(false)
    }

    fn with_constraint(unique_active_names: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryState {
                definitions: HashMap::new(),
                unique_active_names,
            })),
        }
    }

    /// Returns the number of stored definitions with the given name and
    /// active status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionRepositoryError::Persistence`] when the lock
    /// is poisoned.
    pub fn count_active_by_name(&self, name: &str) -> TaskDefinitionRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.active_named(name).count())
    }

    fn read(&self) -> TaskDefinitionRepositoryResult<RwLockReadGuard<'_, InMemoryState>> {
        self.state.read().map_err(|err| {
            TaskDefinitionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskDefinitionRepositoryResult<RwLockWriteGuard<'_, InMemoryState>> {
        self.state.write().map_err(|err| {
            TaskDefinitionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl Default for InMemoryTaskDefinitionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryState {
    fn active_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TaskDefinition> {
        self.definitions
            .values()
            .filter(move |definition| {
                definition.is_active() && definition.task_info().name().as_str() == name
            })
    }
}

#[async_trait]
impl TaskDefinitionReader for InMemoryTaskDefinitionRepository {
    async fn exists_active_by_name(&self, name: &str) -> TaskDefinitionRepositoryResult<bool> {
        debug!(name, "checking for active task definition");
        let state = self.read()?;
        Ok(state.active_named(name).next().is_some())
    }

    async fn find_active_by_name(
        &self,
        name: &str,
    ) -> TaskDefinitionRepositoryResult<Option<TaskDefinition>> {
        debug!(name, "loading active task definition by name");
        let state = self.read()?;
        Ok(state.active_named(name).next().cloned())
    }

    async fn find_by_id(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionRepositoryResult<Option<TaskDefinition>> {
        debug!(%id, "loading task definition by id");
        let state = self.read()?;
        Ok(state.definitions.get(&id).cloned())
    }
}

#[async_trait]
impl TaskDefinitionWriter for InMemoryTaskDefinitionRepository {
    async fn save(
        &self,
        definition: &TaskDefinition,
    ) -> TaskDefinitionRepositoryResult<TaskDefinition> {
        let name = definition.task_info().name().as_str();
        debug!(name, id = %definition.id(), "saving task definition");
        let mut state = self.write()?;

        if state.unique_active_names && definition.is_active() {
            let taken = state
                .active_named(name)
                .any(|existing| existing.id() != definition.id());
            if taken {
                return Err(TaskDefinitionRepositoryError::DuplicateActiveName(
                    name.to_owned(),
                ));
            }
        }

        state
            .definitions
            .insert(definition.id(), definition.clone());
        Ok(definition.clone())
    }
}
