//! Domain model for task definitions.
//!
//! Value objects validate themselves on construction, so an instance is
//! always valid. The [`TaskDefinition`] aggregate composes them and owns the
//! lifecycle transitions. Infrastructure concerns stay outside this module.

mod audit;
mod definition;
mod endpoint;
mod error;
mod http_config;
mod http_method;
mod ids;
mod retry_policy;
mod status;
mod task_info;

pub use audit::Audit;
pub use definition::{Metadata, PersistedTaskDefinitionData, TaskDefinition};
pub use endpoint::Endpoint;
pub use error::{FailureKind, TaskDefinitionDomainError};
pub use http_config::HttpConfig;
pub use http_method::HttpMethod;
pub use ids::TaskDefinitionId;
pub use retry_policy::RetryPolicy;
pub use status::TaskStatus;
pub use task_info::{TaskInfo, TaskName};
