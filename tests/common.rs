use studio_booking::{
    api::router::create_router,
    config::Config,
    domain::ports::{BookingRepository, ClassRepository},
    domain::services::{booking_service::BookingService, catalog::CatalogService},
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_class_repo::SqliteClassRepo,
    },
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            default_timezone: "Asia/Kolkata".to_string(),
        };

        let class_repo: Arc<dyn ClassRepository> = Arc::new(SqliteClassRepo::new(pool.clone()));
        let booking_repo: Arc<dyn BookingRepository> = Arc::new(SqliteBookingRepo::new(pool.clone()));

        let state = Arc::new(AppState {
            config,
            catalog_service: Arc::new(CatalogService::new(class_repo.clone(), booking_repo.clone())),
            booking_service: Arc::new(BookingService::new(class_repo.clone(), booking_repo.clone())),
            class_repo,
            booking_repo,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Creates a class through the API and returns the response body.
    /// Panics on a non-success status so tests fail loudly at the setup step.
    #[allow(dead_code)]
    pub async fn create_class(
        &self,
        name: &str,
        instructor: &str,
        datetime_str: &str,
        timezone_str: &str,
        total_slots: i32,
    ) -> Value {
        let payload = json!({
            "name": name,
            "instructor": instructor,
            "datetime_str": datetime_str,
            "timezone_str": timezone_str,
            "total_slots": total_slots,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/classes")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("create_class failed in test helper: status {}", response.status());
        }

        parse_body(response).await
    }

    /// Books a class through the API, returning status and body for both
    /// success and rejection paths.
    #[allow(dead_code)]
    pub async fn book(&self, class_id: &str, client_name: &str, client_email: &str) -> (StatusCode, Value) {
        let payload = json!({
            "class_id": class_id,
            "client_name": client_name,
            "client_email": client_email,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/book")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        (status, parse_body(response).await)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
