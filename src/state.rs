use crate::config::Config;
use crate::domain::ports::{BookingRepository, ClassRepository};
use crate::domain::services::booking_service::BookingService;
use crate::domain::services::catalog::CatalogService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub class_repo: Arc<dyn ClassRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub catalog_service: Arc<CatalogService>,
    pub booking_service: Arc<BookingService>,
}
