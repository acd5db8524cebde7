use crate::domain::{models::booking::{Booking, BookingDetails}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Locks the class row so concurrent inserts for the same class
        // serialize on the capacity re-count below.
        let total_slots: i32 = sqlx::query("SELECT total_slots FROM classes WHERE id = $1 FOR UPDATE")
            .bind(&booking.class_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::ClassNotFoundOrPast)?
            .get("total_slots");

        let booked = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE class_id = $1")
            .bind(&booking.class_id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?
            .get::<i64, _>("count");
        if booked >= i64::from(total_slots) {
            return Err(AppError::NoAvailableSlots);
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, class_id, client_name, client_email, booked_at_utc)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.class_id).bind(&booking.client_name)
            .bind(&booking.client_email).bind(booking.booked_at_utc)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn count_by_class(&self, class_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE class_id = $1")
            .bind(class_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn find_by_class_and_email(&self, class_id: &str, email: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE class_id = $1 AND client_email = $2")
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
                 WHERE b.client_email = $1 AND c.scheduled_at_utc > $2
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
                 WHERE b.client_email = $1
                 ORDER BY c.scheduled_at_utc ASC"
            )
                .bind(email)
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        }
    }
}
