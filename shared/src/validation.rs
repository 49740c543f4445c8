//! Input validation for the payout engine and plan quoting
//!
//! Everything here rejects values that would otherwise turn into NaN or
//! infinite payouts further down.

use crate::error::{CoreError, CoreResult};
use crate::models::{PolicyParameters, PriceObservation, RegionProfile, WeatherObservation};

fn require_finite(field: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!("{} must be a finite number", field)))
    }
}

/// Orchard area and yield must be positive, base price non-negative
pub fn validate_policy_parameters(policy: &PolicyParameters) -> CoreResult<()> {
    if !(policy.orchard_area.is_finite() && policy.orchard_area > 0.0) {
        return Err(CoreError::invalid_policy(
            "orchard_area",
            "Orchard area must be greater than zero",
        ));
    }
    if !(policy.yield_per_unit_area.is_finite() && policy.yield_per_unit_area > 0.0) {
        return Err(CoreError::invalid_policy(
            "yield_per_unit_area",
            "Yield per unit area must be greater than zero",
        ));
    }
    if !(policy.base_price.is_finite() && policy.base_price >= 0.0) {
        return Err(CoreError::invalid_policy(
            "base_price",
            "Base price cannot be negative",
        ));
    }
    Ok(())
}

/// Trigger price must be positive; it is the divisor of the drop rate
pub fn validate_price_observation(price: &PriceObservation) -> CoreResult<()> {
    if !(price.trigger_price.is_finite() && price.trigger_price > 0.0) {
        return Err(CoreError::invalid_policy(
            "trigger_price",
            "Trigger price must be greater than zero",
        ));
    }
    require_finite("market_price", price.market_price)
}

/// Wind speed and precipitation must be finite and non-negative
pub fn validate_weather_observation(weather: &WeatherObservation) -> CoreResult<()> {
    require_finite("wind_speed", weather.wind_speed)?;
    require_finite("precipitation", weather.precipitation)?;
    if weather.wind_speed < 0.0 || weather.precipitation < 0.0 {
        return Err(CoreError::InvalidInput(
            "Wind speed and precipitation cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/// Check the documented [0.8, 1.3] range of a region's risk level.
///
/// The payout engine only requires a finite value and clamps the region
/// index itself; callers that want strict data can use this check.
pub fn validate_region_risk_level(level: f64) -> CoreResult<()> {
    require_finite("risk_level", level)?;
    if !(RegionProfile::MIN_RISK_LEVEL..=RegionProfile::MAX_RISK_LEVEL).contains(&level) {
        return Err(CoreError::InvalidInput(format!(
            "Region risk level {} is outside [{}, {}]",
            level,
            RegionProfile::MIN_RISK_LEVEL,
            RegionProfile::MAX_RISK_LEVEL
        )));
    }
    Ok(())
}
