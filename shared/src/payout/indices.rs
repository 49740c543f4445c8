//! Risk index sub-calculations
//!
//! The disaster and price indices are stepped: the thresholds and returned
//! constants are actuarial buckets and must not be interpolated.

use crate::error::CoreResult;
use crate::models::{
    DisasterEvent, DisasterSeverity, FarmerBehaviorProfile, PriceObservation, RegionProfile,
    WeatherObservation,
};
use crate::validation::validate_price_observation;

/// Wind speed (m/s) at which the wind factor saturates
pub const WIND_SATURATION: f64 = 35.0;
/// Precipitation (mm) at which the rain factor saturates
pub const PRECIPITATION_SATURATION: f64 = 100.0;

/// Additive bonus for an active disaster of the given severity
pub fn disaster_bonus(severity: DisasterSeverity) -> f64 {
    match severity {
        DisasterSeverity::Extreme => 0.3,
        DisasterSeverity::High => 0.25,
        DisasterSeverity::Medium => 0.15,
        DisasterSeverity::Low => 0.05,
    }
}

/// Raw weighted disaster factor before bucketing
pub fn weighted_disaster_factor(weather: &WeatherObservation, disaster: Option<&DisasterEvent>) -> f64 {
    let wind = (weather.wind_speed / WIND_SATURATION).min(1.0) * 0.4;
    let rain = (weather.precipitation / PRECIPITATION_SATURATION).min(1.0) * 0.3;
    let bonus = disaster.map(|d| disaster_bonus(d.severity)).unwrap_or(0.0);
    wind + rain + bonus
}

/// Disaster index, one of {0, 0.3, 0.7, 0.95}
pub fn disaster_index(weather: &WeatherObservation, disaster: Option<&DisasterEvent>) -> f64 {
    let wdf = weighted_disaster_factor(weather, disaster);
    if wdf <= 0.4 {
        0.0
    } else if wdf <= 0.6 {
        0.3
    } else if wdf <= 0.8 {
        0.7
    } else {
        0.95
    }
}

/// Relative drop of the market price below the trigger price.
///
/// Negative when the market is above the trigger. Fails with
/// `InvalidPolicyParameters` for a non-positive trigger price.
pub fn price_drop_rate(price: &PriceObservation) -> CoreResult<f64> {
    validate_price_observation(price)?;
    Ok((price.trigger_price - price.market_price) / price.trigger_price)
}

/// Bucket a drop rate into {0, 0.6, 0.8, 0.95}
pub fn price_index_for_drop_rate(drop_rate: f64) -> f64 {
    if drop_rate <= 0.1 {
        0.0
    } else if drop_rate <= 0.25 {
        0.6
    } else if drop_rate <= 0.4 {
        0.8
    } else {
        0.95
    }
}

/// Price index, one of {0, 0.6, 0.8, 0.95}
pub fn price_index(price: &PriceObservation) -> CoreResult<f64> {
    price_drop_rate(price).map(price_index_for_drop_rate)
}

/// Unclamped prevention score, between -15 and 100
pub fn behavior_score(profile: &FarmerBehaviorProfile) -> i32 {
    let mut score = 0;
    score += if profile.has_spray_prevention { 25 } else { -10 };
    score += if profile.has_windproof_net { 35 } else { -5 };
    if profile.has_group_insurance {
        score += 20;
    }
    if profile.has_drainage {
        score += 20;
    }
    score
}

/// Behavior index in [0, 1]
pub fn behavior_index(profile: &FarmerBehaviorProfile) -> f64 {
    (f64::from(behavior_score(profile)) / 100.0).clamp(0.0, 1.0)
}

/// Region index: risk level mapped from [0.8, 1.3] onto [0, 1], clamped
pub fn region_index(region: &RegionProfile) -> f64 {
    let span = RegionProfile::MAX_RISK_LEVEL - RegionProfile::MIN_RISK_LEVEL;
    ((region.risk_level - RegionProfile::MIN_RISK_LEVEL) / span).clamp(0.0, 1.0)
}
