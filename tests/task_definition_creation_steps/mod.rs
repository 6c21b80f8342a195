//! Step definitions for task definition creation scenarios.

pub mod given;
pub mod then;
pub mod world;
