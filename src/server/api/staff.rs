use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::{CreateStaffRequest, DeleteResponse};
use crate::server::response::{ApiError, ApiResponse, StoreResultExt};
use crate::types::validate_staff_name;

pub async fn list_staff(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let staff = state.store.list_staff().api_err("Failed to list staff")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(staff)))
}

pub async fn create_staff(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateStaffRequest>,
) -> impl IntoResponse {
    let name = validate_staff_name(&req.name)?;
    let member = state.store.create_staff(name)?;

    tracing::info!("Added staff member '{}' ({})", member.name, member.id);
    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(member))))
}

pub async fn delete_staff(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if !state.store.delete_staff(id)? {
        return Err(ApiError::not_found("Staff member not found"));
    }

    tracing::info!("Removed staff member {}", id);
    Ok::<_, ApiError>(Json(ApiResponse::success(DeleteResponse { deleted: true })))
}
