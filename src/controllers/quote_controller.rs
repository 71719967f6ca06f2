//! Cotizador de usados y planes de financiación
//!
//! Los cálculos son puros; este controller sólo arma las respuestas, loguea
//! y guarda el historial cuando hay un usuario autenticado.

use tracing::{info, warn};

use crate::dto::common_dto::ApiResponse;
use crate::dto::quote_dto::{InstallmentRequestDto, QuoteRequestDto, QuoteResponse};
use crate::models::auth::AuthenticatedUser;
use crate::models::financing_plan::{FinancingPlan, InstallmentResult, PlanFilters};
use crate::models::quote::StoredQuote;
use crate::repositories::quote_repository::QuoteRepository;
use crate::services::{DepreciationCalculator, InstallmentCalculator};
use crate::state::AppState;
use crate::utils::errors::{AppResult, QuoteError};

pub struct QuoteController {
    depreciation: DepreciationCalculator,
    installments: InstallmentCalculator,
    state: AppState,
}

impl QuoteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            depreciation: state.depreciation(),
            installments: state.installments(),
            state: state.clone(),
        }
    }

    fn quotes(&self) -> QuoteRepository {
        QuoteRepository::new(self.state.pool.clone())
    }

    pub async fn quote(
        &self,
        user: Option<AuthenticatedUser>,
        dto: QuoteRequestDto,
    ) -> AppResult<ApiResponse<QuoteResponse>> {
        let request = dto.into_request()?;
        let result = self.depreciation.estimate(&request)?;

        info!(
            "💰 Cotización: {} {} {} {} km ({}) = ${}",
            request.make,
            request.model,
            request.year,
            request.mileage,
            request.condition.as_str(),
            result.estimated_value
        );

        // Guardar en el historial no debe hacer fallar la cotización
        if let Some(user) = user {
            if let Err(e) = self.quotes().save(user.user_id, &request, &result).await {
                warn!("⚠️ No se pudo guardar la cotización de {}: {}", user.username, e);
            }
        }

        Ok(ApiResponse::success(QuoteResponse::new(request, result)))
    }

    pub async fn history(&self, user: &AuthenticatedUser) -> AppResult<Vec<StoredQuote>> {
        self.quotes().find_by_user(user.user_id).await
    }

    pub fn plans(&self, filters: &PlanFilters) -> Vec<FinancingPlan> {
        self.state.plans.list_plans(filters)
    }

    pub fn plan(&self, plan_id: &str) -> AppResult<FinancingPlan> {
        self.state
            .plans
            .find(plan_id)
            .cloned()
            .ok_or_else(|| QuoteError::PlanNotFound(plan_id.to_string()).into())
    }

    pub fn calculate(
        &self,
        plan_id: &str,
        dto: InstallmentRequestDto,
    ) -> AppResult<InstallmentResult> {
        let (amount, down_payment) = dto.amounts()?;
        let result = self
            .installments
            .compute_installment(plan_id, amount, down_payment)?;

        info!(
            "🧮 Cuotas {}: monto ${} enganche ${} -> {} x ${}",
            result.plan_id, amount, down_payment, result.installment_count, result.installment
        );
        Ok(result)
    }
}
