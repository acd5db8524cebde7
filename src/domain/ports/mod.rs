use crate::domain::models::{
    booking::{Booking, BookingDetails},
    class::FitnessClass,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, class: &FitnessClass) -> Result<FitnessClass, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<FitnessClass>, AppError>;
    /// Ordered by `scheduled_at_utc` ascending. `upcoming_only` filters to
    /// classes strictly after the current instant, evaluated per call.
    async fn list(&self, upcoming_only: bool) -> Result<Vec<FitnessClass>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts inside a single transaction that re-counts the class's
    /// bookings against its capacity; the `(class_id, client_email)` unique
    /// constraint catches duplicate races the caller's pre-check missed.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn count_by_class(&self, class_id: &str) -> Result<i64, AppError>;
    async fn find_by_class_and_email(&self, class_id: &str, email: &str) -> Result<Option<Booking>, AppError>;
    /// Joined with classes, ordered by the class's `scheduled_at_utc` ascending.
    async fn list_by_client(&self, email: &str, upcoming_only: bool) -> Result<Vec<BookingDetails>, AppError>;
}
