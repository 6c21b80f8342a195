//! Task definition lifecycle status.

use super::TaskDefinitionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task definition.
///
/// Definitions are never physically removed; retiring one moves it out of
/// [`TaskStatus::Active`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// The definition can be resolved by name.
    #[default]
    Active,
    /// The definition is switched off but may be reactivated.
    Inactive,
    /// The definition is retired.
    Deprecated,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDefinitionDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "DEPRECATED" => Ok(Self::Deprecated),
            _ => Err(TaskDefinitionDomainError::UnknownTaskStatus(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TaskDefinitionDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
