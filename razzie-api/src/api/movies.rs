//! Movie record CRUD handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

use razzie_common::db::models::{Movie, MovieInput};

use crate::api::ApiError;
use crate::validate::{validate_movie_input, validate_patch};
use crate::AppState;

/// Query parameters for the record listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Number of records to skip
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    10
}

/// GET /api/movies
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state
        .store
        .list(query.limit.max(0), query.offset.max(0))
        .await?;
    Ok(Json(movies))
}

/// GET /api/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(state.store.get(id).await?))
}

/// POST /api/movies
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<MovieInput>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    validate_movie_input(&input)?;
    let movie = state.store.insert(&input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/:id
pub async fn replace_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<MovieInput>,
) -> Result<Json<Movie>, ApiError> {
    validate_movie_input(&input)?;
    Ok(Json(state.store.replace(id, &input).await?))
}

/// PATCH /api/movies/:id
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(fields): Json<Map<String, Value>>,
) -> Result<Json<Movie>, ApiError> {
    let patch = validate_patch(&fields)?;
    Ok(Json(state.store.patch(id, &patch).await?))
}

/// DELETE /api/movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
