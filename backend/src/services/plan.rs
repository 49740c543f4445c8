//! Insurance plan catalogue and quotes

use serde::Deserialize;
use shared::{plan_catalogue, quote_plan, InsurancePlan, InsurancePlanId, Language, PlanQuote};

use crate::error::{AppError, AppResult};

#[derive(Clone, Default)]
pub struct PlanService;

/// Input for quoting a plan
#[derive(Debug, Deserialize)]
pub struct QuotePlanInput {
    pub orchard_size: f64,
    pub market_price: f64,
}

impl PlanService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_plans(&self, language: Language) -> Vec<InsurancePlan> {
        plan_catalogue(language)
    }

    /// Quote a plan by its id
    pub fn quote(&self, plan_id: &str, input: &QuotePlanInput) -> AppResult<PlanQuote> {
        let id: InsurancePlanId = plan_id
            .parse()
            .map_err(|_| AppError::NotFound(format!("Insurance plan '{}'", plan_id)))?;

        let quote = quote_plan(id, input.orchard_size, input.market_price)?;
        tracing::debug!(plan = %id, premium = quote.premium, "Plan quoted");
        Ok(quote)
    }
}
