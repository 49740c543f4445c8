//! Insurance plan models

use serde::{Deserialize, Serialize};

/// Identifier of a price-protection plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsurancePlanId {
    /// 成本兜底: trigger 15% below the guide price
    Basic,
    /// 稳健收益: trigger at the guide price
    Standard,
    /// 优质优价: trigger 10% above the guide price
    Premium,
}

impl InsurancePlanId {
    pub const ALL: [InsurancePlanId; 3] = [
        InsurancePlanId::Basic,
        InsurancePlanId::Standard,
        InsurancePlanId::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsurancePlanId::Basic => "basic",
            InsurancePlanId::Standard => "standard",
            InsurancePlanId::Premium => "premium",
        }
    }
}

impl std::str::FromStr for InsurancePlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(InsurancePlanId::Basic),
            "standard" => Ok(InsurancePlanId::Standard),
            "premium" => Ok(InsurancePlanId::Premium),
            other => Err(format!("Unknown insurance plan: {}", other)),
        }
    }
}

impl std::fmt::Display for InsurancePlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plan as listed in the insurance hall
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePlan {
    pub id: InsurancePlanId,
    pub name: String,
    pub description: String,
    pub suitable_for: String,
    /// Multiplier applied to the guide price
    pub trigger_factor: f64,
    pub trigger_price: f64,
    /// Premium rate in percent, for display
    pub premium_rate_percent: f64,
    pub premium_per_mu: f64,
    pub max_payout_per_mu: f64,
    pub highlighted: bool,
}

/// Quote for a plan at a given orchard size and market price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanQuote {
    pub plan_id: InsurancePlanId,
    pub orchard_size: f64,
    pub market_price: f64,
    pub trigger_price: f64,
    pub premium: f64,
    pub max_payout: f64,
    /// Payout if the price falls to the modelled low price
    pub potential_payout: f64,
    /// Upside if the price rises to the modelled high price
    pub max_profit: f64,
}
