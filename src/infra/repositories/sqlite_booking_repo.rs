use crate::domain::{models::booking::{Booking, BookingDetails}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        // Capacity check and insert run as one statement under SQLite's
        // write lock. A missing class makes the comparison NULL, so nothing
        // is inserted.
        let inserted = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, class_id, client_name, client_email, booked_at_utc)
             SELECT ?, ?, ?, ?, ?
             WHERE (SELECT COUNT(*) FROM bookings WHERE class_id = ?)
                   < (SELECT total_slots FROM classes WHERE id = ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.class_id).bind(&booking.client_name)
            .bind(&booking.client_email).bind(booking.booked_at_utc)
            .bind(&booking.class_id).bind(&booking.class_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?;

        match inserted {
            Some(created) => Ok(created),
            None => {
                let class_exists = sqlx::query("SELECT 1 FROM classes WHERE id = ?")
                    .bind(&booking.class_id)
                    .fetch_optional(&self.pool).await.map_err(AppError::Database)?
                    .is_some();
                if class_exists {
                    Err(AppError::NoAvailableSlots)
                } else {
                    Err(AppError::ClassNotFoundOrPast)
                }
            }
        }
    }

    async fn count_by_class(&self, class_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE class_id = ?")
            .bind(class_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn find_by_class_and_email(&self, class_id: &str, email: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE class_id = ? AND client_email = ?")
            .bind(class_id).bind(email)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_client(&self, email: &str, upcoming_only: bool) -> Result<Vec<BookingDetails>, AppError> {
        if upcoming_only {
            sqlx::query_as::<_, BookingDetails>(
                "SELECT b.id, b.class_id, c.name AS class_name, b.client_name, b.client_email,
                        b.booked_at_utc, c.scheduled_at_utc AS class_scheduled_at_utc
                 FROM bookings b
                 JOIN classes c ON b.class_id = c.id
                 WHERE b.client_email = ? AND c.scheduled_at_utc > ?
                 ORDER BY c.scheduled_at_utc ASC"
            )
                .bind(email).bind(Utc::now())
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_as::<_, BookingDetails>(
                "SELECT b.id, b.class_id, c.name AS class_name, b.client_name, b.client_email,
                        b.booked_at_utc, c.scheduled_at_utc AS class_scheduled_at_utc
                 FROM bookings b
                 JOIN classes c ON b.class_id = c.id
                 WHERE b.client_email = ?
                 ORDER BY c.scheduled_at_utc ASC"
            )
                .bind(email)
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        }
    }
}
