use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::kpi::{self, allocator};
use crate::server::AppState;
use crate::server::dto::{AllocateQuery, AllocateResponse};
use crate::server::response::{ApiError, ApiResponse};
use crate::types::EffectiveBudget;

pub async fn monthly_summary(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let summary = kpi::compute_monthly_summary(state.store.as_ref(), year, month)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(summary)))
}

pub async fn monthly_details(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let records = kpi::compute_monthly_details(state.store.as_ref(), year, month)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(records)))
}

pub async fn individual_tracker(
    State(state): State<Arc<AppState>>,
    Path((staff_id, year, month)): Path<(i64, i32, u32)>,
) -> impl IntoResponse {
    let tracker = kpi::compute_individual_tracker(state.store.as_ref(), staff_id, year, month)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(tracker)))
}

pub async fn allocate(Query(query): Query<AllocateQuery>) -> impl IntoResponse {
    let budget = EffectiveBudget {
        total_budget: query.total_budget,
        total_hours: query.total_hours,
    };
    let target_sales = allocator::allocate_target(&budget, query.shift_hours)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(AllocateResponse {
        hourly_rate: allocator::hourly_rate(&budget),
        target_sales,
    })))
}
