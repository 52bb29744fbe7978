//! Sport Routes
//!
//! HTTP handlers that delegate to SportService.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use sports::DomainError;

use crate::models::{SportRequest, SportResponse};
use crate::AppState;

type ApiError = (StatusCode, String);

fn into_api_error(e: DomainError) -> ApiError {
    match e {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        DomainError::MissingField { .. } => (StatusCode::BAD_REQUEST, e.to_string()),
        DomainError::DuplicateNom { .. } => (StatusCode::CONFLICT, e.to_string()),
        DomainError::Repository(_) => {
            tracing::error!("Sport repository failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Not-found handling shared by get and update: 404, or `200 null` in legacy mode.
fn absent(state: &AppState) -> Result<Json<Option<SportResponse>>, ApiError> {
    if state.legacy_null_body {
        Ok(Json(None))
    } else {
        Err((StatusCode::NOT_FOUND, "Sport not found".to_string()))
    }
}

/// Ajouter un sport
#[utoipa::path(
    post,
    path = "/sport",
    request_body = SportRequest,
    responses(
        (status = 201, description = "Sport ajouté avec succès", body = SportResponse),
        (status = 400, description = "Requête invalide"),
        (status = 409, description = "Sport existe déjà"),
        (status = 500, description = "Erreur interne du serveur")
    ),
    tag = "Sports"
)]
pub async fn create_sport(
    State(state): State<AppState>,
    Json(payload): Json<SportRequest>,
) -> Result<(StatusCode, Json<SportResponse>), ApiError> {
    let sport = state
        .sport_service
        .create(payload.nom)
        .await
        .map_err(into_api_error)?;

    Ok((StatusCode::CREATED, Json(sport.into())))
}

/// Récupérer un sport par son ID
#[utoipa::path(
    get,
    path = "/sport/{id}",
    params(
        ("id" = i64, Path, description = "Sport ID")
    ),
    responses(
        (status = 200, description = "Sport trouvé", body = SportResponse),
        (status = 404, description = "Sport non trouvé"),
        (status = 500, description = "Erreur interne du serveur")
    ),
    tag = "Sports"
)]
pub async fn get_sport(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<SportResponse>>, ApiError> {
    match state
        .sport_service
        .get_by_id(id)
        .await
        .map_err(into_api_error)?
    {
        Some(sport) => Ok(Json(Some(sport.into()))),
        None => absent(&state),
    }
}

/// Récupérer la liste de tous les sports
#[utoipa::path(
    get,
    path = "/sports",
    responses(
        (status = 200, description = "Liste des sports récupérée avec succès", body = Vec<SportResponse>),
        (status = 500, description = "Erreur interne du serveur")
    ),
    tag = "Sports"
)]
pub async fn list_sports(
    State(state): State<AppState>,
) -> Result<Json<Vec<SportResponse>>, ApiError> {
    let sports = state
        .sport_service
        .list_all()
        .await
        .map_err(into_api_error)?;

    Ok(Json(sports.into_iter().map(Into::into).collect()))
}

/// Modifier un sport existant
#[utoipa::path(
    put,
    path = "/sport/{id}",
    params(
        ("id" = i64, Path, description = "Sport ID")
    ),
    request_body = SportRequest,
    responses(
        (status = 200, description = "Sport mis à jour avec succès", body = SportResponse),
        (status = 400, description = "Requête invalide"),
        (status = 404, description = "Sport non trouvé"),
        (status = 409, description = "Sport existe déjà"),
        (status = 500, description = "Erreur interne du serveur")
    ),
    tag = "Sports"
)]
pub async fn update_sport(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SportRequest>,
) -> Result<Json<Option<SportResponse>>, ApiError> {
    match state.sport_service.update(id, payload.nom).await {
        Ok(sport) => Ok(Json(Some(sport.into()))),
        Err(DomainError::NotFound { .. }) => absent(&state),
        Err(e) => Err(into_api_error(e)),
    }
}

/// Supprimer un sport
#[utoipa::path(
    delete,
    path = "/sport/{id}",
    params(
        ("id" = i64, Path, description = "Sport ID")
    ),
    responses(
        (status = 204, description = "Sport supprimé avec succès"),
        (status = 500, description = "Erreur interne du serveur")
    ),
    tag = "Sports"
)]
pub async fn delete_sport(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .sport_service
        .delete(id)
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sport", post(create_sport))
        .route(
            "/sport/:id",
            get(get_sport).put(update_sport).delete(delete_sport),
        )
        .route("/sports", get(list_sports))
}
