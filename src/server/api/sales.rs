use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::kpi;
use crate::server::AppState;
use crate::server::dto::SubmitSalesRequest;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::parse_date;

pub async fn day_records(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    let date = parse_date(&date)?;
    let records = kpi::compute_day_records(state.store.as_ref(), date)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(records)))
}

pub async fn submit_sales(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitSalesRequest>,
) -> impl IntoResponse {
    let submission = req.into_submission()?;
    let entry = kpi::submit_sales(state.store.as_ref(), submission)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(entry)))
}
