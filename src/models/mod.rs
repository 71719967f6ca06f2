//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL y los tipos del cotizador.

pub mod alert;
pub mod appointment;
pub mod auth;
pub mod favorite;
pub mod financing_plan;
pub mod message;
pub mod quote;
pub mod user;
pub mod vehicle;
