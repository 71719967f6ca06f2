//! Controllers: lógica de cada recurso entre las rutas y los repositorios

pub mod alert_controller;
pub mod appointment_controller;
pub mod dashboard_controller;
pub mod favorite_controller;
pub mod message_controller;
pub mod quote_controller;
pub mod vehicle_controller;
