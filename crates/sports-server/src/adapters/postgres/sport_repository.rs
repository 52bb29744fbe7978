//! PostgreSQL implementation of SportRepository

use async_trait::async_trait;
use sqlx::PgPool;

use sports::{DomainError, Sport, SportRepository};

/// PostgreSQL implementation of SportRepository
pub struct PgSportRepository {
    pool: PgPool,
}

impl PgSportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct SportRow {
    id: i64,
    nom: String,
}

impl From<SportRow> for Sport {
    fn from(row: SportRow) -> Self {
        Self {
            id: row.id,
            nom: row.nom,
        }
    }
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

/// Writes of `nom`: the unique constraint on `sports.nom` is a duplicate name
fn write_error(e: sqlx::Error, nom: &str) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::duplicate_nom(nom);
        }
    }
    storage_error(e)
}

#[async_trait]
impl SportRepository for PgSportRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, DomainError> {
        let row = sqlx::query_as::<_, SportRow>("SELECT id, nom FROM sports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Sport>, DomainError> {
        let rows = sqlx::query_as::<_, SportRow>("SELECT id, nom FROM sports ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, nom: &str) -> Result<Sport, DomainError> {
        let row = sqlx::query_as::<_, SportRow>(
            r#"
            INSERT INTO sports (nom)
            VALUES ($1)
            RETURNING id, nom
            "#,
        )
        .bind(nom)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, nom))?;

        Ok(row.into())
    }

    async fn save(&self, sport: &Sport) -> Result<Sport, DomainError> {
        let row = sqlx::query_as::<_, SportRow>(
            r#"
            UPDATE sports
            SET nom = $2
            WHERE id = $1
            RETURNING id, nom
            "#,
        )
        .bind(sport.id)
        .bind(&sport.nom)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &sport.nom))?;

        // Row can vanish between the caller's lookup and this update
        row.map(Into::into)
            .ok_or_else(|| DomainError::not_found(sport.id))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};

    /// Stand-in for a driver error carrying a constraint kind
    #[derive(Debug, thiserror::Error)]
    #[error("{message}")]
    struct ConstraintError {
        message: &'static str,
        unique: bool,
    }

    impl DatabaseError for ConstraintError {
        fn message(&self) -> &str {
            self.message
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn database_error(message: &'static str, unique: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ConstraintError { message, unique }))
    }

    #[test]
    fn unique_violation_on_write_is_a_duplicate_nom() {
        let err = write_error(
            database_error(
                "duplicate key value violates unique constraint \"sports_nom_key\"",
                true,
            ),
            "Football",
        );
        assert!(matches!(err, DomainError::DuplicateNom { nom } if nom == "Football"));
    }

    #[test]
    fn other_database_errors_on_write_are_storage_failures() {
        let err = write_error(database_error("deadlock detected", false), "Football");
        assert!(matches!(err, DomainError::Repository(msg) if msg.contains("deadlock detected")));
    }

    #[test]
    fn non_database_errors_map_to_repository() {
        assert!(matches!(
            storage_error(sqlx::Error::RowNotFound),
            DomainError::Repository(_)
        ));
        assert!(matches!(
            write_error(sqlx::Error::RowNotFound, "Football"),
            DomainError::Repository(_)
        ));
    }
}
