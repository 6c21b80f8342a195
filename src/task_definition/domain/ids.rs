//! Identifier type for task definitions.

use super::TaskDefinitionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a task definition.
///
/// Generated once when a definition is created and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDefinitionId(Uuid);

impl TaskDefinitionId {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier from its canonical text form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::EmptyIdentifier`] for blank input
    /// or [`TaskDefinitionDomainError::InvalidIdentifier`] when the text is
    /// not a UUID.
    pub fn parse(value: &str) -> Result<Self, TaskDefinitionDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDefinitionDomainError::EmptyIdentifier);
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| TaskDefinitionDomainError::InvalidIdentifier(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskDefinitionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TaskDefinitionId {
    type Err = TaskDefinitionDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl AsRef<Uuid> for TaskDefinitionId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
