//! Task definition aggregate root.

use super::{Audit, HttpConfig, RetryPolicy, TaskDefinitionId, TaskInfo, TaskStatus};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form string annotations attached to a task definition.
pub type Metadata = BTreeMap<String, String>;

/// Task definition aggregate root.
///
/// Every component is a validated value before it is installed, so the
/// aggregate is never partially built. Each mutation advances the audit
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PersistedTaskDefinitionData")]
pub struct TaskDefinition {
    id: TaskDefinitionId,
    task_info: TaskInfo,
    status: TaskStatus,
    metadata: Metadata,
    http_config: HttpConfig,
    retry_policy: RetryPolicy,
    audit: Audit,
}

/// Parameter object for reconstructing a persisted task definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskDefinitionData {
    /// Persisted identifier.
    pub id: TaskDefinitionId,
    /// Persisted name, category and description.
    pub task_info: TaskInfo,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted metadata entries.
    #[serde(default)]
    pub metadata: Metadata,
    /// Persisted HTTP configuration.
    pub http_config: HttpConfig,
    /// Persisted retry policy.
    pub retry_policy: RetryPolicy,
    /// Persisted audit timestamps.
    pub audit: Audit,
}

impl From<PersistedTaskDefinitionData> for TaskDefinition {
    fn from(data: PersistedTaskDefinitionData) -> Self {
        Self::from_persisted(data)
    }
}

impl TaskDefinition {
    /// Creates a new task definition with a fresh identifier and audit
    /// record.
    #[must_use]
    pub fn create_new(
        task_info: TaskInfo,
        status: TaskStatus,
        metadata: Metadata,
        http_config: HttpConfig,
        retry_policy: RetryPolicy,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskDefinitionId::new(),
            task_info,
            status,
            metadata,
            http_config,
            retry_policy,
            audit: Audit::started(clock),
        }
    }

    /// Reconstructs a task definition from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskDefinitionData) -> Self {
        Self {
            id: data.id,
            task_info: data.task_info,
            status: data.status,
            metadata: data.metadata,
            http_config: data.http_config,
            retry_policy: data.retry_policy,
            audit: data.audit,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TaskDefinitionId {
        self.id
    }

    /// Returns the name, category and description.
    #[must_use]
    pub const fn task_info(&self) -> &TaskInfo {
        &self.task_info
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the metadata entries.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub const fn http_config(&self) -> &HttpConfig {
        &self.http_config
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the audit timestamps.
    #[must_use]
    pub const fn audit(&self) -> Audit {
        self.audit
    }

    /// Returns `true` when the status is [`TaskStatus::Active`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    /// Sets the status to [`TaskStatus::Active`].
    ///
    /// The timestamp advances even if the definition was already active.
    pub fn activate(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Active;
        self.touch(clock);
    }

    /// Sets the status to [`TaskStatus::Inactive`].
    ///
    /// The timestamp advances even if the definition was already inactive.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Inactive;
        self.touch(clock);
    }

    /// Sets the status to [`TaskStatus::Deprecated`].
    pub fn deprecate(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Deprecated;
        self.touch(clock);
    }

    /// Replaces the HTTP configuration.
    pub fn update_http_config(&mut self, http_config: HttpConfig, clock: &impl Clock) {
        self.http_config = http_config;
        self.touch(clock);
    }

    /// Replaces the retry policy.
    pub fn update_retry_policy(&mut self, retry_policy: RetryPolicy, clock: &impl Clock) {
        self.retry_policy = retry_policy;
        self.touch(clock);
    }

    /// Replaces all metadata entries.
    pub fn update_metadata(&mut self, metadata: Metadata, clock: &impl Clock) {
        self.metadata = metadata;
        self.touch(clock);
    }

    /// Inserts or overwrites a single metadata entry.
    ///
    /// Any string is a valid key, including the empty string.
    pub fn add_metadata(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        clock: &impl Clock,
    ) {
        self.metadata.insert(key.into(), value.into());
        self.touch(clock);
    }

    /// Removes a metadata entry, returning its previous value.
    ///
    /// The timestamp advances whether or not the key was present.
    pub fn remove_metadata(&mut self, key: &str, clock: &impl Clock) -> Option<String> {
        let removed = self.metadata.remove(key);
        self.touch(clock);
        removed
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.audit = self.audit.with_updated_at(clock.utc());
    }
}

