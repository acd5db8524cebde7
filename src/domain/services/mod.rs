pub mod booking_service;
pub mod catalog;
pub mod timezone;
