use axum::{extract::{Query, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{BookClassRequest, ListBookingsQuery};
use crate::error::AppError;
use crate::state::AppState;

pub async fn book_class(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("book_class: Starting for class {}", payload.class_id);

    let details = state.booking_service
        .book_class(&payload.class_id, &payload.client_name, &payload.client_email)
        .await?;

    info!("Booking confirmed: {} for class {}", details.id, details.class_id);
    Ok(Json(details))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let upcoming_only = params.upcoming_only.unwrap_or(true);

    let bookings = state.booking_service
        .list_client_bookings(&params.email, upcoming_only)
        .await?;

    Ok(Json(bookings))
}
