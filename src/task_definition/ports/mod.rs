//! Port contracts for task definition persistence.
//!
//! The core reads through [`TaskDefinitionReader`] and writes through
//! [`TaskDefinitionWriter`]; adapters implement both.

pub mod repository;

pub use repository::{
    TaskDefinitionReader, TaskDefinitionRepositoryError, TaskDefinitionRepositoryResult,
    TaskDefinitionWriter,
};
