//! Payout calculation models

use serde::{Deserialize, Serialize};

use crate::models::{
    active_disaster_for, DisasterEvent, FarmerBehaviorProfile, PriceObservation, RegionProfile,
    RiskTier, WeatherObservation,
};
use crate::types::Language;

/// Policy parameters entered on the calculator form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PolicyParameters {
    /// Insured orchard area in mu
    pub orchard_area: f64,
    /// Expected yield per mu in jin
    pub yield_per_unit_area: f64,
    /// Base price per jin
    pub base_price: f64,
}

/// Everything the payout engine needs for one calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutRequest {
    pub weather: WeatherObservation,
    #[serde(default)]
    pub disaster: Option<DisasterEvent>,
    /// Current disaster bulletins; consulted when `disaster` is absent
    #[serde(default)]
    pub disaster_events: Vec<DisasterEvent>,
    pub price: PriceObservation,
    pub behavior: FarmerBehaviorProfile,
    pub region: RegionProfile,
    pub policy: PolicyParameters,
    #[serde(default)]
    pub language: Language,
}

impl PayoutRequest {
    /// The disaster that applies to this request.
    ///
    /// An explicit `disaster` wins; otherwise the first bulletin whose
    /// affected area names the region.
    pub fn active_disaster(&self) -> Option<&DisasterEvent> {
        self.disaster
            .as_ref()
            .or_else(|| active_disaster_for(&self.disaster_events, &self.region.name))
    }
}

/// Recommendation attached to a payout decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutRecommendation {
    EmergencyPrePayout,
    PriceProtection,
    StrengthenPrevention,
    ContinueMonitoring,
}

impl PayoutRecommendation {
    pub fn text(&self, language: Language) -> &'static str {
        match self {
            PayoutRecommendation::EmergencyPrePayout => {
                language.pick("建议立即启动预赔付通道", "Activate emergency pre-payout channel")
            }
            PayoutRecommendation::PriceProtection => language.pick(
                "价格下跌显著，建议激活价格保障",
                "Significant price drop, activate price protection",
            ),
            PayoutRecommendation::StrengthenPrevention => language.pick(
                "建议加强防灾措施以提升赔付比例",
                "Strengthen disaster-prevention measures to improve payout ratio",
            ),
            PayoutRecommendation::ContinueMonitoring => language.pick(
                "继续监控，各项指标正常",
                "Continue monitoring, indicators normal",
            ),
        }
    }
}

/// Result of a payout calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutResult {
    pub disaster_index: f64,
    pub price_index: f64,
    pub behavior_index: f64,
    pub region_index: f64,
    pub total_payout_index: f64,
    pub payout_amount: f64,
    pub pre_payout_amount: f64,
    pub government_subsidy: f64,
    pub max_payout: f64,
    pub region_risk_tier: RiskTier,
    pub recommendation_kind: PayoutRecommendation,
    pub recommendation: String,
}
