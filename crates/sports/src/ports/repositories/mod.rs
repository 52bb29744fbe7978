//! Repository Ports

mod sport_repository;

pub use sport_repository::*;
