//! Use-case services for task definitions.

mod command;
mod error;
mod factory;
mod query;
mod registry;
mod summary;
pub mod validation;

pub use command::{CreateTaskDefinitionCommand, HttpConfigCommand, RetryPolicyCommand};
pub use error::{TaskDefinitionServiceError, TaskDefinitionServiceResult};
pub use factory::TaskDefinitionFactory;
pub use query::TaskDefinitionExistenceQuery;
pub use registry::TaskDefinitionService;
pub use summary::TaskDefinitionSummary;
pub use validation::{CommandViolations, FieldViolation, validate_command};
