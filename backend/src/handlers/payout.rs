//! HTTP handlers for payout calculation

use axum::Json;
use shared::{PayoutRequest, PayoutResult};

use crate::error::AppResult;
use crate::services::PayoutService;

/// Calculate a payout decision
pub async fn calculate_payout(Json(request): Json<PayoutRequest>) -> AppResult<Json<PayoutResult>> {
    let result = PayoutService::new().calculate(&request)?;
    Ok(Json(result))
}
