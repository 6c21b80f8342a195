//! Task definition registration and resolution.
//!
//! A task definition describes an HTTP call (endpoint, method, timeout,
//! headers, payload template) plus its retry policy. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use-case services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
