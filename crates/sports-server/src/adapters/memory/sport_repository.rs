//! In-memory implementation of SportRepository

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use sports::{DomainError, Sport, SportRepository};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    sports: BTreeMap<i64, Sport>,
}

impl Store {
    fn name_taken(&self, nom: &str, except: Option<i64>) -> bool {
        self.sports
            .values()
            .any(|s| s.nom == nom && Some(s.id) != except)
    }
}

/// In-memory Sport store.
///
/// IDs are assigned from a counter and never reused, matching a BIGSERIAL
/// column. Names are unique like the `sports.nom` constraint.
#[derive(Debug, Default)]
pub struct InMemorySportRepository {
    store: RwLock<Store>,
}

impl InMemorySportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Repository("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl SportRepository for InMemorySportRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Sport>, DomainError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.sports.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Sport>, DomainError> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.sports.values().cloned().collect())
    }

    async fn insert(&self, nom: &str) -> Result<Sport, DomainError> {
        let mut store = self.store.write().map_err(poisoned)?;
        if store.name_taken(nom, None) {
            return Err(DomainError::duplicate_nom(nom));
        }

        store.last_id += 1;
        let sport = Sport::new(store.last_id, nom);
        store.sports.insert(sport.id, sport.clone());

        Ok(sport)
    }

    async fn save(&self, sport: &Sport) -> Result<Sport, DomainError> {
        let mut store = self.store.write().map_err(poisoned)?;
        if !store.sports.contains_key(&sport.id) {
            return Err(DomainError::not_found(sport.id));
        }
        if store.name_taken(&sport.nom, Some(sport.id)) {
            return Err(DomainError::duplicate_nom(&sport.nom));
        }

        store.sports.insert(sport.id, sport.clone());
        Ok(sport.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.store.write().map_err(poisoned)?;
        Ok(store.sports.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let repo = InMemorySportRepository::new();
        let a = repo.insert("Football").await.unwrap();
        let b = repo.insert("Rugby").await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.insert("Tennis").await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemorySportRepository::new();
        for nom in ["Volley", "Basket", "Judo"] {
            repo.insert(nom).await.unwrap();
        }

        let noms: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.nom)
            .collect();
        assert_eq!(noms, vec!["Volley", "Basket", "Judo"]);
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let repo = InMemorySportRepository::new();
        repo.insert("Football").await.unwrap();

        let err = repo.insert("Football").await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateNom { .. }));
    }

    #[tokio::test]
    async fn save_may_keep_own_name_but_not_take_another() {
        let repo = InMemorySportRepository::new();
        let football = repo.insert("Football").await.unwrap();
        repo.insert("Rugby").await.unwrap();

        assert_eq!(repo.save(&football).await.unwrap(), football);

        let err = repo
            .save(&Sport::new(football.id, "Rugby"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateNom { nom } if nom == "Rugby"));
    }

    #[tokio::test]
    async fn save_unknown_id_is_not_found() {
        let repo = InMemorySportRepository::new();
        let err = repo.save(&Sport::new(5, "Escrime")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let repo = InMemorySportRepository::new();
        let sport = repo.insert("Natation").await.unwrap();

        assert!(repo.delete(sport.id).await.unwrap());
        assert!(!repo.delete(sport.id).await.unwrap());
        assert!(repo.find_by_id(sport.id).await.unwrap().is_none());
    }
}
