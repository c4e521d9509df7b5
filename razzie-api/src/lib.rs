//! razzie-api library - film award record service
//!
//! Record CRUD over SQLite plus the producer win-interval analytic.

use axum::Router;
use sqlx::SqlitePool;

pub mod analytics;
pub mod api;
pub mod db;
pub mod validate;

use db::MovieStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Storage handle for movie records
    pub store: MovieStore,
}

impl AppState {
    /// Create application state over an initialized pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: MovieStore::new(pool),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;

    Router::new()
        .route(
            "/api/movies/producers/intervals",
            get(api::producer_intervals),
        )
        .route(
            "/api/movies",
            get(api::list_movies).post(api::create_movie),
        )
        .route(
            "/api/movies/:id",
            get(api::get_movie)
                .put(api::replace_movie)
                .patch(api::patch_movie)
                .delete(api::delete_movie),
        )
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
