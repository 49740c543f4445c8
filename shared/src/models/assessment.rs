//! Fruit assessment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{GeoLocation, Language, LocalizedText};

/// Health classification of an assessed fruit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Diseased,
    PestInfected,
    Damaged,
}

impl HealthStatus {
    const HEALTHY: LocalizedText = LocalizedText::new("健康", "Healthy");
    const DISEASED: LocalizedText = LocalizedText::new("病害", "Diseased");
    const PEST_INFECTED: LocalizedText = LocalizedText::new("虫害", "Pest infected");
    const DAMAGED: LocalizedText = LocalizedText::new("损伤", "Damaged");

    /// Display label in the requested language
    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            HealthStatus::Healthy => Self::HEALTHY,
            HealthStatus::Diseased => Self::DISEASED,
            HealthStatus::PestInfected => Self::PEST_INFECTED,
            HealthStatus::Damaged => Self::DAMAGED,
        };
        text.get(language)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

/// Maturity stage derived from the ripeness score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RipenessStage {
    /// score < 30
    Unripe,
    /// 30 <= score < 50
    GreenRipening,
    /// 50 <= score < 70
    HalfRipe,
    /// 70 <= score < 85
    Ripe,
    /// score >= 85
    FullyRipe,
}

impl RipenessStage {
    pub fn label(&self, language: Language) -> &'static str {
        match self {
            RipenessStage::Unripe => language.pick("未成熟", "Unripe"),
            RipenessStage::GreenRipening => language.pick("绿熟期", "Green ripening"),
            RipenessStage::HalfRipe => language.pick("半熟期", "Half ripe"),
            RipenessStage::Ripe => language.pick("成熟期", "Ripe"),
            RipenessStage::FullyRipe => language.pick("完熟期", "Fully ripe"),
        }
    }
}

impl std::fmt::Display for RipenessStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

/// Classify a ripeness score into its stage.
///
/// Each bucket includes its lower bound, so a score of exactly 30 is
/// `GreenRipening`.
pub fn classify_ripeness_stage(score: f64) -> RipenessStage {
    if score < 30.0 {
        RipenessStage::Unripe
    } else if score < 50.0 {
        RipenessStage::GreenRipening
    } else if score < 70.0 {
        RipenessStage::HalfRipe
    } else if score < 85.0 {
        RipenessStage::Ripe
    } else {
        RipenessStage::FullyRipe
    }
}

/// Result of a single image analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// 0-100
    pub ripeness_score: u8,
    pub health_status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pest_type: Option<String>,
    /// 0-95
    pub confidence: u8,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn ripeness_stage(&self) -> RipenessStage {
        classify_ripeness_stage(f64::from(self.ripeness_score))
    }
}

/// A stored assessment, as kept by the history view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub image_url: String,
    pub fruit_type: String,
    pub ripeness_score: u8,
    pub health_status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pest_type: Option<String>,
    pub confidence: u8,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

impl AssessmentRecord {
    /// Build a new record from a fresh analysis
    pub fn from_analysis(
        user_id: impl Into<String>,
        image_url: impl Into<String>,
        fruit_type: impl Into<String>,
        analysis: AnalysisResult,
        location: Option<GeoLocation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            user_id: user_id.into(),
            image_url: image_url.into(),
            fruit_type: fruit_type.into(),
            ripeness_score: analysis.ripeness_score,
            health_status: analysis.health_status,
            disease_type: analysis.disease_type,
            pest_type: analysis.pest_type,
            confidence: analysis.confidence,
            recommendations: analysis.recommendations,
            location,
        }
    }
}
