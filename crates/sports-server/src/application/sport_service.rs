//! Sport Application Service (Use Case)
//!
//! Orchestrates domain operations for Sport management.

use std::sync::Arc;

use sports::{DomainError, Sport, SportRepository};

/// Application service for Sport operations
pub struct SportService<R: SportRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: SportRepository + ?Sized> SportService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Sports
    pub async fn list_all(&self) -> Result<Vec<Sport>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Sport by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Sport>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new Sport. The name is the only required field.
    pub async fn create(&self, nom: Option<String>) -> Result<Sport, DomainError> {
        let nom = nom.ok_or_else(|| DomainError::MissingField { field: "nom" })?;
        let saved = self.repo.insert(&nom).await?;

        tracing::info!("Created Sport: {} ({})", saved.nom, saved.id);

        Ok(saved)
    }

    /// Update a Sport. Only `nom` is mutable; `None` leaves it untouched.
    pub async fn update(&self, id: i64, nom: Option<String>) -> Result<Sport, DomainError> {
        let mut current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        let renamed = current.rename(nom);
        let saved = self.repo.save(&current).await?;

        if renamed {
            tracing::info!("Updated Sport: {} ({})", saved.nom, saved.id);
        }

        Ok(saved)
    }

    /// Delete a Sport. Deleting an absent ID is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            tracing::info!("Deleted Sport: {}", id);
        } else {
            tracing::debug!("Delete requested for absent Sport: {}", id);
        }
        Ok(())
    }
}
