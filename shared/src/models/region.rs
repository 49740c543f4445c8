//! Orchard region models

use serde::{Deserialize, Serialize};

/// Risk character of a region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RegionType {
    TyphoonCorridor,
    FloodRisk,
    DroughtProne,
    ShelterBenefit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilDrainage {
    Good,
    Moderate,
    Poor,
}

/// Coarse risk tier used for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// risk level >= 1.2
    High,
    /// risk level >= 1.0
    Elevated,
    Low,
}

/// Region risk profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub region_type: Option<RegionType>,
    /// Expected in [0.8, 1.3]
    pub risk_level: f64,
    #[serde(default)]
    pub historical_disaster_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_drainage: Option<SoilDrainage>,
    /// 0-1
    #[serde(default)]
    pub traffic_accessibility: f64,
}

impl RegionProfile {
    pub const MIN_RISK_LEVEL: f64 = 0.8;
    pub const MAX_RISK_LEVEL: f64 = 1.3;

    pub fn with_risk_level(name: impl Into<String>, risk_level: f64) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            region_type: None,
            risk_level,
            historical_disaster_count: 0,
            soil_drainage: None,
            traffic_accessibility: 0.0,
        }
    }

    pub fn risk_tier(&self) -> RiskTier {
        if self.risk_level >= 1.2 {
            RiskTier::High
        } else if self.risk_level >= 1.0 {
            RiskTier::Elevated
        } else {
            RiskTier::Low
        }
    }
}
