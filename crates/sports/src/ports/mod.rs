//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with persistence. Implementations live in the server crate.

pub mod repositories;

pub use repositories::*;
