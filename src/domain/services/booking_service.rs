use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::models::booking::{Booking, BookingDetails};
use crate::domain::ports::{BookingRepository, ClassRepository};
use crate::error::AppError;

pub struct BookingService {
    classes: Arc<dyn ClassRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(classes: Arc<dyn ClassRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { classes, bookings }
    }

    /// Books one slot for a client. The pre-checks here produce the
    /// deterministic rejections; the repository's atomic insert is what makes
    /// the last-slot and duplicate races safe.
    pub async fn book_class(&self, class_id: &str, client_name: &str, client_email: &str) -> Result<BookingDetails, AppError> {
        // A past class is indistinguishable from a missing one.
        let class = self
            .classes
            .find_by_id(class_id)
            .await?
            .filter(|c| c.scheduled_at_utc > Utc::now())
            .ok_or(AppError::ClassNotFoundOrPast)?;

        let booked = self.bookings.count_by_class(class_id).await?;
        if booked >= i64::from(class.total_slots) {
            return Err(AppError::NoAvailableSlots);
        }

        let email = client_email.trim();
        if self.bookings.find_by_class_and_email(class_id, email).await?.is_some() {
            return Err(AppError::DuplicateBooking);
        }

        let name = client_name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Client name cannot be empty".into()));
        }
        if !is_valid_email(email) {
            return Err(AppError::Validation("Invalid email address".into()));
        }

        let booking = Booking::new(class_id, name, email);
        let created = self.bookings.create(&booking).await?;

        info!("Booking created: {} for class {}", created.id, created.class_id);

        Ok(BookingDetails {
            id: created.id,
            class_id: created.class_id,
            class_name: class.name,
            client_name: created.client_name,
            client_email: created.client_email,
            booked_at_utc: created.booked_at_utc,
            class_scheduled_at_utc: class.scheduled_at_utc,
        })
    }

    pub async fn list_client_bookings(&self, email: &str, upcoming_only: bool) -> Result<Vec<BookingDetails>, AppError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AppError::Validation("Invalid email address".into()));
        }

        let bookings = self.bookings.list_by_client(email, upcoming_only).await?;
        info!("Retrieved {} bookings for {}", bookings.len(), email);
        Ok(bookings)
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
}
