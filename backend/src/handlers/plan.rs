//! HTTP handlers for insurance plans

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use shared::{InsurancePlan, Language, PlanQuote};

use crate::error::AppResult;
use crate::services::plan::{PlanService, QuotePlanInput};

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub language: Language,
}

/// List the plan catalogue
pub async fn list_plans(Query(query): Query<LanguageQuery>) -> Json<Vec<InsurancePlan>> {
    Json(PlanService::new().list_plans(query.language))
}

/// Quote a plan for an orchard
pub async fn quote_plan(
    Path(plan_id): Path<String>,
    Json(input): Json<QuotePlanInput>,
) -> AppResult<Json<PlanQuote>> {
    let quote = PlanService::new().quote(&plan_id, &input)?;
    Ok(Json(quote))
}
