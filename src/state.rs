//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. La configuración del cotizador y el
//! catálogo de planes se construyen una vez y se comparten sin mutarse.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::config::quote_settings::QuoteSettings;
use crate::services::depreciation_service::DepreciationCalculator;
use crate::services::installment_service::InstallmentCalculator;
use crate::services::plan_catalog_service::FinancingPlanCatalog;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub jwt: JwtConfig,
    pub quote_settings: Arc<QuoteSettings>,
    pub plans: Arc<FinancingPlanCatalog>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        quote_settings: QuoteSettings,
        plans: FinancingPlanCatalog,
    ) -> Self {
        let jwt = JwtConfig::from(&config);
        Self {
            pool,
            config,
            jwt,
            quote_settings: Arc::new(quote_settings),
            plans: Arc::new(plans),
        }
    }

    pub fn depreciation(&self) -> DepreciationCalculator {
        DepreciationCalculator::new(Arc::clone(&self.quote_settings))
    }

    pub fn installments(&self) -> InstallmentCalculator {
        InstallmentCalculator::new(Arc::clone(&self.plans))
    }
}
