//! Descriptive task information: name, category and description.

use super::TaskDefinitionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated task name.
///
/// Names are the human-facing key for resolving active definitions, so they
/// are restricted to `[A-Za-z0-9_-]` and kept case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskName(String);

impl TaskName {
    /// Minimum accepted name length.
    pub const MIN_LENGTH: usize = 3;
    /// Maximum accepted name length.
    pub const MAX_LENGTH: usize = 100;

    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::EmptyTaskName`] for blank input,
    /// [`TaskDefinitionDomainError::TaskNameLength`] when the length is
    /// outside `3..=100`, or [`TaskDefinitionDomainError::InvalidTaskName`]
    /// when a character falls outside `[A-Za-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDefinitionDomainError> {
        let raw = value.into();

        if raw.trim().is_empty() {
            return Err(TaskDefinitionDomainError::EmptyTaskName);
        }

        Self::check_length(&raw)?;
        Self::check_pattern(&raw)?;

        Ok(Self(raw))
    }

    /// Checks the name length without building a value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::TaskNameLength`] when the length
    /// is outside `3..=100`.
    pub fn check_length(name: &str) -> Result<(), TaskDefinitionDomainError> {
        let length = name.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(TaskDefinitionDomainError::TaskNameLength(length));
        }
        Ok(())
    }

    /// Checks the name characters without building a value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::InvalidTaskName`] when a
    /// character falls outside `[A-Za-z0-9_-]`.
    pub fn check_pattern(name: &str) -> Result<(), TaskDefinitionDomainError> {
        let is_valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !is_valid {
            return Err(TaskDefinitionDomainError::InvalidTaskName(name.to_owned()));
        }
        Ok(())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskName {
    type Error = TaskDefinitionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskName> for String {
    fn from(name: TaskName) -> Self {
        name.0
    }
}

/// Name, category and description of a task definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskInfoFields")]
pub struct TaskInfo {
    name: TaskName,
    category: String,
    description: String,
}

#[derive(Deserialize)]
struct TaskInfoFields {
    name: String,
    category: String,
    description: String,
}

impl TryFrom<TaskInfoFields> for TaskInfo {
    type Error = TaskDefinitionDomainError;

    fn try_from(fields: TaskInfoFields) -> Result<Self, Self::Error> {
        Self::new(fields.name, fields.category, fields.description)
    }
}

impl TaskInfo {
    /// Minimum accepted category length.
    pub const CATEGORY_MIN_LENGTH: usize = 2;
    /// Maximum accepted category length.
    pub const CATEGORY_MAX_LENGTH: usize = 50;
    /// Maximum accepted description length.
    pub const DESCRIPTION_MAX_LENGTH: usize = 500;

    /// Creates validated task information.
    ///
    /// Fields are checked in order (name, category, description) and the
    /// first violation is returned. The description may be empty.
    ///
    /// # Errors
    ///
    /// Returns the [`TaskDefinitionDomainError`] raised by
    /// [`TaskName::new`], [`TaskInfo::check_category`], or
    /// [`TaskInfo::check_description`].
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskDefinitionDomainError> {
        let task_name = TaskName::new(name)?;
        let category_text = category.into();
        Self::check_category(&category_text)?;
        let description_text = description.into();
        Self::check_description(&description_text)?;

        Ok(Self {
            name: task_name,
            category: category_text,
            description: description_text,
        })
    }

    /// Checks the category rules without building a value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::EmptyCategory`] for blank input or
    /// [`TaskDefinitionDomainError::CategoryLength`] when the length is
    /// outside `2..=50`.
    pub fn check_category(category: &str) -> Result<(), TaskDefinitionDomainError> {
        if category.trim().is_empty() {
            return Err(TaskDefinitionDomainError::EmptyCategory);
        }
        let length = category.chars().count();
        if !(Self::CATEGORY_MIN_LENGTH..=Self::CATEGORY_MAX_LENGTH).contains(&length) {
            return Err(TaskDefinitionDomainError::CategoryLength(length));
        }
        Ok(())
    }

    /// Checks the description rules without building a value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::DescriptionTooLong`] when the
    /// description exceeds 500 characters.
    pub fn check_description(description: &str) -> Result<(), TaskDefinitionDomainError> {
        let length = description.chars().count();
        if length > Self::DESCRIPTION_MAX_LENGTH {
            return Err(TaskDefinitionDomainError::DescriptionTooLong(length));
        }
        Ok(())
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the task description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
