use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub instructor: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM`.
    pub datetime_str: String,
    pub total_slots: i32,
    pub timezone_str: Option<String>,
}

#[derive(Deserialize)]
pub struct BookClassRequest {
    pub class_id: String,
    pub client_name: String,
    pub client_email: String,
}

#[derive(Deserialize)]
pub struct ListClassesQuery {
    pub timezone_str: Option<String>,
    pub upcoming_only: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListBookingsQuery {
    pub email: String,
    pub upcoming_only: Option<bool>,
}
