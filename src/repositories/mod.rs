//! Acceso a datos con sqlx

pub mod alert_repository;
pub mod appointment_repository;
pub mod favorite_repository;
pub mod message_repository;
pub mod quote_repository;
pub mod user_repository;
pub mod vehicle_repository;
