//! Producer win-interval analytic endpoint

use axum::extract::State;
use axum::Json;

use crate::analytics::{self, IntervalReport};
use crate::api::ApiError;
use crate::AppState;

/// GET /api/movies/producers/intervals
///
/// Scans winning records ordered by year and reports the producers with
/// the smallest and largest gap between consecutive wins. An empty or
/// repeat-free dataset yields empty lists, not an error.
pub async fn producer_intervals(
    State(state): State<AppState>,
) -> Result<Json<IntervalReport>, ApiError> {
    let rows = state.store.winning_movies().await?;
    Ok(Json(analytics::producer_win_intervals(&rows)))
}
