//! Service layer for creating task definitions and managing their lifecycle.
//!
//! Provides [`TaskDefinitionService`], which validates create commands,
//! enforces the unique-active-name rule, and drives status transitions.

use super::{
    command::CreateTaskDefinitionCommand,
    error::{TaskDefinitionServiceError, TaskDefinitionServiceResult},
    factory::TaskDefinitionFactory,
    validation::validate_command,
};
use crate::task_definition::{
    domain::{TaskDefinition, TaskDefinitionDomainError, TaskDefinitionId},
    ports::{TaskDefinitionReader, TaskDefinitionWriter},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Task definition creation and lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskDefinitionService<R, C>
where
    R: TaskDefinitionReader + TaskDefinitionWriter,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    factory: TaskDefinitionFactory,
}

impl<R, C> TaskDefinitionService<R, C>
where
    R: TaskDefinitionReader + TaskDefinitionWriter,
    C: Clock + Send + Sync,
{
    /// Creates a new task definition service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            factory: TaskDefinitionFactory::new(),
        }
    }

    /// Creates and persists a task definition.
    ///
    /// Every field rule is checked first and all violations are reported
    /// together. The name is then checked against existing active
    /// definitions; the first conflict stops the call. The existence check
    /// and the save are separate store calls, so a store-level conflict on
    /// save is reported as the same duplicate-name failure.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionServiceError::InvalidCommand`] when field
    /// validation fails, [`TaskDefinitionServiceError::Domain`] when a value
    /// object rejects its input, [`TaskDefinitionServiceError::DuplicateActiveName`]
    /// when the name is already active, or
    /// [`TaskDefinitionServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        command: &CreateTaskDefinitionCommand,
    ) -> TaskDefinitionServiceResult<TaskDefinition> {
        let name = command.name_or_empty();
        info!(
            name,
            category = command.category.as_deref().unwrap_or_default(),
            "creating task definition"
        );

        if let Err(violations) = validate_command(command) {
            warn!(
                name,
                violations = violations.len(),
                "task definition command failed validation"
            );
            return Err(violations.into());
        }

        if self.repository.exists_active_by_name(name).await? {
            warn!(name, "active task definition already exists");
            return Err(TaskDefinitionServiceError::DuplicateActiveName(
                name.to_owned(),
            ));
        }

        let definition = self.factory.create_from(command, &*self.clock)?;
        let saved = self
            .repository
            .save(&definition)
            .await
            .map_err(TaskDefinitionServiceError::from)
            .inspect_err(|err| {
                if matches!(err, TaskDefinitionServiceError::DuplicateActiveName(_)) {
                    warn!(name, "store rejected duplicate active task definition");
                }
            })?;

        info!(name, id = %saved.id(), "created task definition");
        Ok(saved)
    }

    /// Finds a task definition by identifier.
    ///
    /// Returns `Ok(None)` when no definition has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionServiceResult<Option<TaskDefinition>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds the active task definition with `name`.
    ///
    /// Returns `Ok(None)` when no active definition has the name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionServiceError::Domain`] when the name is blank,
    /// or [`TaskDefinitionServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_active_by_name(
        &self,
        name: &str,
    ) -> TaskDefinitionServiceResult<Option<TaskDefinition>> {
        if name.trim().is_empty() {
            return Err(TaskDefinitionDomainError::EmptyTaskName.into());
        }
        Ok(self.repository.find_active_by_name(name).await?)
    }

    /// Activates a task definition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionServiceError::NotFound`] when the definition
    /// does not exist, [`TaskDefinitionServiceError::DuplicateActiveName`]
    /// when another active definition now holds the name, or
    /// [`TaskDefinitionServiceError::Repository`] when persistence fails.
    pub async fn activate(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionServiceResult<TaskDefinition> {
        let mut definition = self.find_by_id_or_error(id).await?;
        definition.activate(&*self.clock);
        Ok(self.repository.save(&definition).await?)
    }

    /// Deactivates a task definition, freeing its name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionServiceError::NotFound`] when the definition
    /// does not exist, or [`TaskDefinitionServiceError::Repository`] when
    /// persistence fails.
    pub async fn deactivate(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionServiceResult<TaskDefinition> {
        let mut definition = self.find_by_id_or_error(id).await?;
        definition.deactivate(&*self.clock);
        Ok(self.repository.save(&definition).await?)
    }

    /// Marks a task definition as deprecated, freeing its name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionServiceError::NotFound`] when the definition
    /// does not exist, or [`TaskDefinitionServiceError::Repository`] when
    /// persistence fails.
    pub async fn deprecate(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionServiceResult<TaskDefinition> {
        let mut definition = self.find_by_id_or_error(id).await?;
        definition.deprecate(&*self.clock);
        Ok(self.repository.save(&definition).await?)
    }

    async fn find_by_id_or_error(
        &self,
        id: TaskDefinitionId,
    ) -> TaskDefinitionServiceResult<TaskDefinition> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskDefinitionServiceError::NotFound(id))
    }
}
