//! Payout calculation service

use shared::{validate_region_risk_level, PayoutEngine, PayoutRequest, PayoutResult};

use crate::error::AppResult;

/// Payout service wrapping the stateless payout engine
#[derive(Clone, Default)]
pub struct PayoutService {
    engine: PayoutEngine,
}

impl PayoutService {
    pub fn new() -> Self {
        Self {
            engine: PayoutEngine::new(),
        }
    }

    /// Calculate a payout decision for one policy
    pub fn calculate(&self, request: &PayoutRequest) -> AppResult<PayoutResult> {
        // The engine clamps the region index; out-of-range data is only flagged
        if let Err(e) = validate_region_risk_level(request.region.risk_level) {
            tracing::warn!(region = %request.region.name, "{}", e);
        }

        let result = self.engine.calculate(request)?;

        tracing::info!(
            region = %request.region.name,
            risk_tier = ?result.region_risk_tier,
            language = request.language.code(),
            verified_evidence = request.behavior.verified_evidence_count(),
            disaster_index = result.disaster_index,
            price_index = result.price_index,
            behavior_index = result.behavior_index,
            region_index = result.region_index,
            total_payout_index = result.total_payout_index,
            payout_amount = result.payout_amount,
            "Payout calculated"
        );

        Ok(result)
    }
}
