use crate::domain::{models::class::FitnessClass, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

pub struct PostgresClassRepo {
    pool: PgPool,
}

impl PostgresClassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PostgresClassRepo {
    async fn create(&self, class: &FitnessClass) -> Result<FitnessClass, AppError> {
        sqlx::query_as::<_, FitnessClass>(
            "INSERT INTO classes (id, name, instructor, scheduled_at_utc, timezone, total_slots, created_at_utc)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&class.id).bind(&class.name).bind(&class.instructor)
            .bind(class.scheduled_at_utc).bind(&class.timezone)
            .bind(class.total_slots).bind(class.created_at_utc)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM classes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, upcoming_only: bool) -> Result<Vec<FitnessClass>, AppError> {
        if upcoming_only {
            sqlx::query_as::<_, FitnessClass>(
                "SELECT * FROM classes WHERE scheduled_at_utc > $1 ORDER BY scheduled_at_utc ASC"
            )
                .bind(Utc::now())
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        } else {
            sqlx::query_as::<_, FitnessClass>("SELECT * FROM classes ORDER BY scheduled_at_utc ASC")
                .fetch_all(&self.pool).await.map_err(AppError::Database)
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM classes")
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
