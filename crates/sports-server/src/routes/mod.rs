//! Sports API Routes
//!
//! - /sport - create
//! - /sport/:id - read, update, delete
//! - /sports - list

pub mod sport;
pub mod swagger;
