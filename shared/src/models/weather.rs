//! Weather and disaster models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weather station observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    #[serde(default)]
    pub station_id: String,
    #[serde(default)]
    pub station_name: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    /// m/s
    pub wind_speed: f64,
    /// mm
    pub precipitation: f64,
    pub pressure_hpa: f64,
    pub timestamp: DateTime<Utc>,
}

/// Types of disaster events
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DisasterType {
    Typhoon,
    Rainstorm,
    Drought,
    Frost,
    Heat,
}

/// Disaster severity levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DisasterSeverity {
    Low,
    Medium,
    High,
    Extreme,
}

/// An active or historical disaster event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisasterEvent {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub disaster_type: DisasterType,
    pub severity: DisasterSeverity,
    /// Comma separated region names, e.g. "湛江、阳江"
    pub affected_area: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl DisasterEvent {
    /// Whether the event's affected area mentions the region
    pub fn affects(&self, region_name: &str) -> bool {
        !region_name.is_empty() && self.affected_area.contains(region_name)
    }
}

/// First event affecting the region, if any.
///
/// At most one disaster is active per payout calculation.
pub fn active_disaster_for<'a>(
    events: &'a [DisasterEvent],
    region_name: &str,
) -> Option<&'a DisasterEvent> {
    events.iter().find(|e| e.affects(region_name))
}
