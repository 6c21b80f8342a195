//! Creation and modification timestamps.

use super::TaskDefinitionDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Audit timestamps for a task definition.
///
/// `updated_at` is never earlier than `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuditFields")]
pub struct Audit {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct AuditFields {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AuditFields> for Audit {
    type Error = TaskDefinitionDomainError;

    fn try_from(fields: AuditFields) -> Result<Self, Self::Error> {
        Self::new(fields.created_at, fields.updated_at)
    }
}

impl Audit {
    /// Creates an audit record from explicit timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDefinitionDomainError::AuditOutOfOrder`] when
    /// `updated_at` precedes `created_at`.
    pub fn new(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, TaskDefinitionDomainError> {
        if updated_at < created_at {
            return Err(TaskDefinitionDomainError::AuditOutOfOrder {
                created_at,
                updated_at,
            });
        }
        Ok(Self {
            created_at,
            updated_at,
        })
    }

    /// Creates a fresh audit record with both timestamps set to now.
    #[must_use]
    pub fn started(clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns a copy advanced to `timestamp`.
    ///
    /// An earlier `timestamp` leaves `updated_at` where it is, so the record
    /// never moves backwards even if the clock does.
    #[must_use]
    pub fn with_updated_at(self, timestamp: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: self.updated_at.max(timestamp),
        }
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
