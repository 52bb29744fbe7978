//! Sport request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use sports::Sport;

/// Sport payload for create and update.
///
/// `id` is accepted for compatibility with clients that echo a full Sport
/// back, but it is never applied.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SportRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nom: Option<String>,
}

/// Sport response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SportResponse {
    pub id: i64,
    pub nom: String,
}

impl From<Sport> for SportResponse {
    fn from(sport: Sport) -> Self {
        Self {
            id: sport.id,
            nom: sport.nom,
        }
    }
}
