//! In-memory Repository Implementations
//!
//! Used by tests and for running the router without a database.

mod sport_repository;

pub use sport_repository::InMemorySportRepository;
