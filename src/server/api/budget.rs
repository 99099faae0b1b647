use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::import::{BudgetRow, ImportSummary, prepare_budgets};
use crate::kpi::{self, allocator};
use crate::server::AppState;
use crate::server::dto::BudgetResponse;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::parse_date;

pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    let date = parse_date(&date)?;
    let budget = kpi::effective_budget(state.store.as_ref(), date)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(BudgetResponse {
        date,
        total_budget: budget.total_budget,
        total_hours: budget.total_hours,
        hourly_rate: allocator::hourly_rate(&budget),
    })))
}

pub async fn upsert_budget(
    State(state): State<Arc<AppState>>,
    Json(row): Json<BudgetRow>,
) -> impl IntoResponse {
    let (prepared, _) = prepare_budgets(std::slice::from_ref(&row))?;
    let Some(budget) = prepared.into_iter().next() else {
        return Err(ApiError::bad_request(format!(
            "'{}' is a placeholder date",
            row.date
        )));
    };

    state.store.upsert_budget(&budget)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(budget)))
}

pub async fn bulk_budgets(
    State(state): State<Arc<AppState>>,
    Json(rows): Json<Vec<BudgetRow>>,
) -> impl IntoResponse {
    let (prepared, skipped) = prepare_budgets(&rows)?;
    let imported = state.store.bulk_upsert_budgets(&prepared)?;

    Ok::<_, ApiError>(Json(ApiResponse::success(ImportSummary {
        imported,
        skipped,
        dates: prepared.iter().map(|b| b.date).collect(),
        ..Default::default()
    })))
}
