use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Class not found or has already occurred")]
    ClassNotFoundOrPast,
    #[error("No available slots for this class")]
    NoAvailableSlots,
    #[error("You have already booked this class")]
    DuplicateBooking,
    #[error("Class datetime must be in the future")]
    ClassMustBeFuture,
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
    #[error("Invalid datetime format: {0}")]
    InvalidDateTimeFormat(String),
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "error": "You have already booked this class" }))
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::ClassNotFoundOrPast => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::NoAvailableSlots | AppError::DuplicateBooking => (StatusCode::CONFLICT, self.to_string()),
            AppError::ClassMustBeFuture
            | AppError::InvalidTimezone(_)
            | AppError::InvalidDateTimeFormat(_)
            | AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
