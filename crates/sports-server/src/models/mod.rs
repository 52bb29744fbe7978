//! Sports API Data Models
//!
//! Wire representations of the Sport resource.

mod sport;

pub use sport::*;
