//! Taskdef: registry of named, versioned HTTP task definitions.
//!
//! Clients register task definitions, which are declarative descriptions of
//! an HTTP call plus a retry policy. They can later ask whether an active
//! definition with a given name exists.
//!
//! # Architecture
//!
//! Taskdef follows hexagonal architecture principles:
//!
//! - **Domain**: Self-validating value objects and the aggregate root
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Use-cases orchestrating validation, the unique-name rule,
//!   and persistence
//!
//! # Modules
//!
//! - [`task_definition`]: Task definition model, ports and use-cases
//! - [`telemetry`]: Tracing subscriber installation

pub mod task_definition;
pub mod telemetry;
