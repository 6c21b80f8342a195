//! Adapter implementations for task definition ports.

pub mod memory;
