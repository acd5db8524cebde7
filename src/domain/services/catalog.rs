use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::models::class::{ClassView, FitnessClass, NewClassParams};
use crate::domain::ports::{BookingRepository, ClassRepository};
use crate::domain::services::timezone;
use crate::error::AppError;

pub struct CatalogService {
    classes: Arc<dyn ClassRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl CatalogService {
    pub fn new(classes: Arc<dyn ClassRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { classes, bookings }
    }

    /// Lists classes with availability computed from the committed booking
    /// count at read time. Ordering (ascending by scheduled time) comes from
    /// the store.
    pub async fn list_classes(&self, display_timezone: &str, upcoming_only: bool) -> Result<Vec<ClassView>, AppError> {
        let classes = self.classes.list(upcoming_only).await?;

        let mut views = Vec::with_capacity(classes.len());
        for class in classes {
            let booked = self.bookings.count_by_class(&class.id).await? as i32;
            views.push(class_view(&class, booked, display_timezone));
        }

        info!("Retrieved {} classes", views.len());
        Ok(views)
    }

    pub async fn create_class(&self, params: NewClassParams) -> Result<ClassView, AppError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Class name cannot be empty".into()));
        }
        let instructor = params.instructor.trim();
        if instructor.is_empty() {
            return Err(AppError::Validation("Instructor name cannot be empty".into()));
        }
        if params.total_slots <= 0 {
            return Err(AppError::Validation("Total slots must be greater than 0".into()));
        }

        let scheduled_at_utc = timezone::to_utc(&params.datetime_str, &params.timezone)?;
        if scheduled_at_utc <= Utc::now() {
            return Err(AppError::ClassMustBeFuture);
        }

        let class = FitnessClass::new(name, instructor, scheduled_at_utc, params.timezone, params.total_slots);
        let created = self.classes.create(&class).await?;

        info!("Created new class: {}", created.id);
        Ok(class_view(&created, 0, &created.timezone))
    }
}

fn class_view(class: &FitnessClass, booked_slots: i32, display_timezone: &str) -> ClassView {
    ClassView {
        id: class.id.clone(),
        name: class.name.clone(),
        instructor: class.instructor.clone(),
        scheduled_at_utc: class.scheduled_at_utc,
        datetime_local: timezone::to_local_display(class.scheduled_at_utc, display_timezone),
        // Echoes the requested zone name even when rendering fell back to UTC.
        timezone: display_timezone.to_string(),
        total_slots: class.total_slots,
        available_slots: class.total_slots - booked_slots,
        booked_slots,
    }
}
