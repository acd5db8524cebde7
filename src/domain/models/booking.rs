use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub class_id: String,
    pub client_name: String,
    pub client_email: String,
    pub booked_at_utc: DateTime<Utc>,
}

impl Booking {
    pub fn new(class_id: &str, client_name: &str, client_email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            class_id: class_id.to_string(),
            client_name: client_name.to_string(),
            client_email: client_email.to_string(),
            booked_at_utc: Utc::now(),
        }
    }
}

/// A booking joined with the class it reserves, as returned to the client.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct BookingDetails {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub client_name: String,
    pub client_email: String,
    pub booked_at_utc: DateTime<Utc>,
    pub class_scheduled_at_utc: DateTime<Utc>,
}
