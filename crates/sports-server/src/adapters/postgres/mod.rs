//! PostgreSQL Repository Implementations

mod sport_repository;

pub use sport_repository::PgSportRepository;
