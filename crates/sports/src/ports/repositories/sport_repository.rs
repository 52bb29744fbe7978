//! Sport Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Sport};

/// Repository interface for Sport entities
#[async_trait]
pub trait SportRepository: Send + Sync {
    /// Find a Sport by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, DomainError>;

    /// Find all Sports, ordered by ID
    async fn find_all(&self) -> Result<Vec<Sport>, DomainError>;

    /// Insert a new Sport; the repository assigns the ID
    async fn insert(&self, nom: &str) -> Result<Sport, DomainError>;

    /// Persist changes to an existing Sport
    async fn save(&self, sport: &Sport) -> Result<Sport, DomainError>;

    /// Delete a Sport by ID. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
