use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::import::{RosterRow, prepare_roster};
use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse};

pub async fn bulk_roster(
    State(state): State<Arc<AppState>>,
    Json(rows): Json<Vec<RosterRow>>,
) -> impl IntoResponse {
    let (prepared, skipped) = prepare_roster(&rows)?;
    let mut summary = state.store.bulk_upsert_roster(&prepared)?;
    summary.skipped = skipped;

    Ok::<_, ApiError>(Json(ApiResponse::success(summary)))
}
