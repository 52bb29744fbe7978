//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of the repository ports.

mod sport_service;

pub use sport_service::SportService;
