//! Backend de la concesionaria
//!
//! Catálogo de vehículos, cotizador de usados, planes de financiación y
//! el área de clientes (favoritos, turnos, alertas). El binario principal
//! está en `main.rs`; la librería expone el router para los tests.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
