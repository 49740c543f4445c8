//! Farmer behavior models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of evidence a farmer uploaded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    Photo,
    Video,
}

/// Uploaded proof of a prevention measure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvidenceUpload {
    pub date: NaiveDate,
    pub kind: EvidenceKind,
    pub description: String,
    pub verified: bool,
}

/// Prevention measures a farmer has in place.
///
/// The evidence log is informational and does not feed the payout formula.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FarmerBehaviorProfile {
    #[serde(default)]
    pub farmer_id: String,
    #[serde(default)]
    pub has_windproof_net: bool,
    #[serde(default)]
    pub has_spray_prevention: bool,
    #[serde(default)]
    pub has_drainage: bool,
    #[serde(default)]
    pub has_group_insurance: bool,
    #[serde(default)]
    pub evidence: Vec<EvidenceUpload>,
}

impl FarmerBehaviorProfile {
    /// Profile with every prevention measure in place
    pub fn fully_prepared(farmer_id: impl Into<String>) -> Self {
        Self {
            farmer_id: farmer_id.into(),
            has_windproof_net: true,
            has_spray_prevention: true,
            has_drainage: true,
            has_group_insurance: true,
            evidence: Vec::new(),
        }
    }

    pub fn verified_evidence_count(&self) -> usize {
        self.evidence.iter().filter(|e| e.verified).count()
    }
}
