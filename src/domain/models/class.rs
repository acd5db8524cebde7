use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct FitnessClass {
    pub id: String,
    pub name: String,
    pub instructor: String,
    pub scheduled_at_utc: DateTime<Utc>,
    pub timezone: String,
    pub total_slots: i32,
    pub created_at_utc: DateTime<Utc>,
}

impl FitnessClass {
    pub fn new(name: &str, instructor: &str, scheduled_at_utc: DateTime<Utc>, timezone: String, total_slots: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            instructor: instructor.to_string(),
            scheduled_at_utc,
            timezone,
            total_slots,
            created_at_utc: Utc::now(),
        }
    }
}

pub struct NewClassParams {
    pub name: String,
    pub instructor: String,
    pub datetime_str: String,
    pub timezone: String,
    pub total_slots: i32,
}

/// Listing/creation read model: a class plus its computed slot counts and the
/// scheduled time rendered in the caller's display timezone.
#[derive(Debug, Serialize, Clone)]
pub struct ClassView {
    pub id: String,
    pub name: String,
    pub instructor: String,
    pub scheduled_at_utc: DateTime<Utc>,
    pub datetime_local: String,
    pub timezone: String,
    pub total_slots: i32,
    pub available_slots: i32,
    pub booked_slots: i32,
}
