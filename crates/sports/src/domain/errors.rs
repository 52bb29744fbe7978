//! Domain Errors

use thiserror::Error;

/// Failures surfaced by Sport operations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Sport {id} not found")]
    NotFound { id: i64 },

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("a sport named {nom:?} already exists")]
    DuplicateNom { nom: String },

    #[error("storage failure: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn duplicate_nom(nom: impl Into<String>) -> Self {
        Self::DuplicateNom { nom: nom.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(DomainError::not_found(42).to_string(), "Sport 42 not found");
        assert_eq!(
            DomainError::MissingField { field: "nom" }.to_string(),
            "nom is required"
        );
        assert_eq!(
            DomainError::duplicate_nom("Rugby").to_string(),
            "a sport named \"Rugby\" already exists"
        );
    }
}
