//! Market price models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily price observation for a variety in a region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceObservation {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub variety: String,
    #[serde(default)]
    pub region: String,
    /// Current wholesale price
    pub market_price: f64,
    /// Model-predicted protection price
    #[serde(default)]
    pub predicted_price: f64,
    /// Policy-defined strike price
    pub trigger_price: f64,
}
