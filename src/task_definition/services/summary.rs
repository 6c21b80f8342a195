//! Outward representation of a created task definition.

use crate::task_definition::domain::TaskDefinition;
use serde::{Deserialize, Serialize};

/// Identifier, descriptive fields and status of a task definition, all as
/// plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinitionSummary {
    /// Canonical identifier text.
    pub id: String,
    /// Task name.
    pub name: String,
    /// Task category.
    pub category: String,
    /// Task description.
    pub description: String,
    /// Status text, e.g. `ACTIVE`.
    pub status: String,
}

impl From<&TaskDefinition> for TaskDefinitionSummary {
    fn from(definition: &TaskDefinition) -> Self {
        let info = definition.task_info();
        Self {
            id: definition.id().to_string(),
            name: info.name().as_str().to_owned(),
            category: info.category().to_owned(),
            description: info.description().to_owned(),
            status: definition.status().as_str().to_owned(),
        }
    }
}
