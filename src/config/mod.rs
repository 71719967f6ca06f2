//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y los parámetros del cotizador.

pub mod database;
pub mod environment;
pub mod quote_settings;

pub use environment::*;
pub use quote_settings::QuoteSettings;
