//! Sports Domain Library
//!
//! Core domain types and interfaces for the Sports API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): the `Sport` entity and `DomainError`
//! - **Ports** (`ports/`): the `SportRepository` persistence interface
//!
//! Adapters implementing the ports live in `sports-server`.

pub mod domain;
pub mod ports;

pub use domain::{DomainError, Sport};
pub use ports::SportRepository;
