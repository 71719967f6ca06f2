//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. Los tres
//! calculadores del cotizador son puros y no tocan la base de datos.

pub mod auth_service;
pub mod depreciation_service;
pub mod installment_service;
pub mod plan_catalog_service;

pub use depreciation_service::DepreciationCalculator;
pub use installment_service::InstallmentCalculator;
pub use plan_catalog_service::FinancingPlanCatalog;
