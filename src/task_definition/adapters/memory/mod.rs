//! In-memory adapters for task definition persistence.

mod repository;

pub use repository::InMemoryTaskDefinitionRepository;
