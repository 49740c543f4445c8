//! Weighted aggregation and monetary derivation

use crate::error::{CoreError, CoreResult};
use crate::models::{
    DisasterEvent, FarmerBehaviorProfile, PayoutRecommendation, PayoutRequest, PayoutResult,
    PolicyParameters, PriceObservation, RegionProfile, WeatherObservation,
};
use crate::types::Language;
use crate::validation::{validate_policy_parameters, validate_weather_observation};

use super::indices::{
    behavior_index, disaster_index, price_drop_rate, price_index_for_drop_rate, region_index,
};

pub const DISASTER_WEIGHT: f64 = 0.35;
pub const PRICE_WEIGHT: f64 = 0.40;
pub const BEHAVIOR_WEIGHT: f64 = 0.15;
pub const REGION_WEIGHT: f64 = 0.10;

/// Share of the base payout that caps any payout
pub const MAX_PAYOUT_RATIO: f64 = 0.95;
/// Share of the payout released before final settlement
pub const PRE_PAYOUT_RATIO: f64 = 0.5;

/// The four normalized risk indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskIndices {
    pub disaster: f64,
    pub price: f64,
    pub behavior: f64,
    pub region: f64,
}

impl RiskIndices {
    /// Convex combination of the indices under the fixed weights
    pub fn total(&self) -> f64 {
        self.disaster * DISASTER_WEIGHT
            + self.price * PRICE_WEIGHT
            + self.behavior * BEHAVIOR_WEIGHT
            + self.region * REGION_WEIGHT
    }

    /// First match wins: disaster, then price, then behavior.
    pub fn recommendation(&self) -> PayoutRecommendation {
        if self.disaster > 0.7 {
            PayoutRecommendation::EmergencyPrePayout
        } else if self.price > 0.6 {
            PayoutRecommendation::PriceProtection
        } else if self.behavior < 0.5 {
            PayoutRecommendation::StrengthenPrevention
        } else {
            PayoutRecommendation::ContinueMonitoring
        }
    }
}

/// Government subsidy ratio for a price drop rate
pub fn subsidy_ratio(drop_rate: f64) -> f64 {
    if drop_rate > 0.25 {
        0.5
    } else if drop_rate > 0.1 {
        0.3
    } else {
        0.0
    }
}

/// Compute a payout decision.
///
/// Fails with `InvalidPolicyParameters` for a non-positive trigger price,
/// orchard area or yield, and with `InvalidInput` for non-finite or negative
/// weather readings or a non-finite region risk level.
pub fn calculate_payout(
    weather: &WeatherObservation,
    disaster: Option<&DisasterEvent>,
    price: &PriceObservation,
    behavior: &FarmerBehaviorProfile,
    region: &RegionProfile,
    policy: &PolicyParameters,
    language: Language,
) -> CoreResult<PayoutResult> {
    validate_policy_parameters(policy)?;
    validate_weather_observation(weather)?;
    if !region.risk_level.is_finite() {
        return Err(CoreError::InvalidInput(
            "risk_level must be a finite number".to_string(),
        ));
    }

    let drop_rate = price_drop_rate(price)?;
    let indices = RiskIndices {
        disaster: disaster_index(weather, disaster),
        price: price_index_for_drop_rate(drop_rate),
        behavior: behavior_index(behavior),
        region: region_index(region),
    };
    let total_payout_index = indices.total();

    let expected_yield = policy.orchard_area * policy.yield_per_unit_area;
    let base_payout = expected_yield * policy.base_price;
    let max_payout = base_payout * MAX_PAYOUT_RATIO;
    let payout_amount = (base_payout * total_payout_index).min(max_payout);
    let pre_payout_amount = payout_amount * PRE_PAYOUT_RATIO;
    let government_subsidy = payout_amount * subsidy_ratio(drop_rate);

    let recommendation_kind = indices.recommendation();

    Ok(PayoutResult {
        disaster_index: indices.disaster,
        price_index: indices.price,
        behavior_index: indices.behavior,
        region_index: indices.region,
        total_payout_index,
        payout_amount,
        pre_payout_amount,
        government_subsidy,
        max_payout,
        region_risk_tier: region.risk_tier(),
        recommendation_kind,
        recommendation: recommendation_kind.text(language).to_string(),
    })
}

/// Stateless payout engine; recomputes on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutEngine;

impl PayoutEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, request: &PayoutRequest) -> CoreResult<PayoutResult> {
        calculate_payout(
            &request.weather,
            request.active_disaster(),
            &request.price,
            &request.behavior,
            &request.region,
            &request.policy,
            request.language,
        )
    }
}
