//! Domain Entities

mod sport;

pub use sport::*;
