//! Sport - the single managed entity

use serde::{Deserialize, Serialize};

/// A sport, identified by a storage-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub id: i64,
    pub nom: String,
}

impl Sport {
    pub fn new(id: i64, nom: impl Into<String>) -> Self {
        Self {
            id,
            nom: nom.into(),
        }
    }

    /// Apply a partial rename. `None` keeps the current name.
    ///
    /// Returns `true` when the name actually changed.
    pub fn rename(&mut self, nom: Option<String>) -> bool {
        match nom {
            Some(nom) if nom != self.nom => {
                self.nom = nom;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_with_value_overwrites_nom() {
        let mut sport = Sport::new(1, "Football");
        assert!(sport.rename(Some("Rugby".to_string())));
        assert_eq!(sport, Sport::new(1, "Rugby"));
    }

    #[test]
    fn rename_with_none_keeps_nom() {
        let mut sport = Sport::new(1, "Football");
        assert!(!sport.rename(None));
        assert_eq!(sport.nom, "Football");
    }

    #[test]
    fn rename_to_same_value_reports_no_change() {
        let mut sport = Sport::new(7, "Tennis");
        assert!(!sport.rename(Some("Tennis".to_string())));
        assert_eq!(sport.id, 7);
    }

    #[test]
    fn serializes_as_id_and_nom() {
        let json = serde_json::to_value(Sport::new(3, "Handball")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "nom": "Handball" }));
    }
}
