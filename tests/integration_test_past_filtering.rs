mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use studio_booking::domain::models::booking::Booking;
use studio_booking::domain::models::class::FitnessClass;
use studio_booking::domain::ports::{BookingRepository, ClassRepository};
use tower::ServiceExt;

async fn insert_past_class(app: &TestApp, name: &str) -> FitnessClass {
    let class = FitnessClass::new(
        name,
        "Priya Sharma",
        Utc::now() - Duration::days(1),
        "Asia/Kolkata".to_string(),
        20,
    );
    app.state.class_repo.create(&class).await.unwrap()
}

#[tokio::test]
async fn test_past_classes_hidden_from_upcoming_listing() {
    let app = TestApp::new().await;

    insert_past_class(&app, "Yesterday Yoga").await;
    app.create_class("Tomorrow Yoga", "Priya Sharma", "2099-06-10 07:00", "Asia/Kolkata", 20).await;

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/classes")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let classes = parse_body(response).await;
    let classes = classes.as_array().unwrap();

    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["name"], "Tomorrow Yoga");
}

#[tokio::test]
async fn test_full_listing_includes_past_classes_in_order() {
    let app = TestApp::new().await;

    insert_past_class(&app, "Yesterday Yoga").await;
    app.create_class("Tomorrow Yoga", "Priya Sharma", "2099-06-10 07:00", "Asia/Kolkata", 20).await;

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/classes?upcoming_only=false")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let classes = parse_body(response).await;
    let names: Vec<&str> = classes.as_array().unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Yesterday Yoga", "Tomorrow Yoga"]);
}

#[tokio::test]
async fn test_past_bookings_hidden_from_upcoming_listing() {
    let app = TestApp::new().await;

    let past = insert_past_class(&app, "Yesterday Yoga").await;
    // Inserted at the repository level: the engine refuses past classes.
    app.state.booking_repo.create(&Booking::new(&past.id, "Bob", "bob@example.com")).await.unwrap();

    let future = app.create_class("Tomorrow Yoga", "Priya Sharma", "2099-06-10 07:00", "Asia/Kolkata", 20).await;
    let (status, _) = app.book(future["id"].as_str().unwrap(), "Bob", "bob@example.com").await;
    assert_eq!(status, StatusCode::OK);

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/bookings?email=bob@example.com")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let bookings = parse_body(response).await;
    let bookings = bookings.as_array().unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["class_name"], "Tomorrow Yoga");

    let response = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/bookings?email=bob@example.com&upcoming_only=false")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let bookings = parse_body(response).await;
    let names: Vec<&str> = bookings.as_array().unwrap()
        .iter()
        .map(|b| b["class_name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Yesterday Yoga", "Tomorrow Yoga"]);
}
