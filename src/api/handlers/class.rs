use axum::{extract::{Query, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateClassRequest, ListClassesQuery};
use crate::domain::models::class::NewClassParams;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListClassesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let timezone = params.timezone_str.as_deref().unwrap_or(&state.config.default_timezone);
    let upcoming_only = params.upcoming_only.unwrap_or(true);

    let classes = state.catalog_service.list_classes(timezone, upcoming_only).await?;
    Ok(Json(classes))
}

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_class: Starting for '{}'", payload.name);

    let timezone = payload.timezone_str.unwrap_or_else(|| state.config.default_timezone.clone());

    let view = state.catalog_service.create_class(NewClassParams {
        name: payload.name,
        instructor: payload.instructor,
        datetime_str: payload.datetime_str,
        timezone,
        total_slots: payload.total_slots,
    }).await?;

    Ok(Json(view))
}
