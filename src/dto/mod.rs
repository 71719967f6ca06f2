//! Data Transfer Objects
//!
//! Requests y responses de la API. Los nombres de campo aceptan los alias
//! en castellano que usa el frontend.

pub mod alert_dto;
pub mod appointment_dto;
pub mod auth_dto;
pub mod common_dto;
pub mod favorite_dto;
pub mod message_dto;
pub mod quote_dto;
pub mod vehicle_dto;

pub use common_dto::ApiResponse;
