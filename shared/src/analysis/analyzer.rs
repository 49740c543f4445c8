//! Ripeness scoring and health classification

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::{average_color, detect_pest_damage_ratio, detect_spot_ratio, Hsv, PixelBuffer};
use crate::error::{CoreError, CoreResult};
use crate::models::{AnalysisResult, HealthStatus};
use crate::types::{Language, LocalizedText};

/// Longer image edge after downscaling
pub const DEFAULT_MAX_EDGE: u32 = 400;

const DISEASE_SPOT_RATIO: f64 = 0.15;
const PEST_DAMAGE_RATIO: f64 = 0.05;
const MINOR_SPOT_RATIO: f64 = 0.05;

const DISEASE_TYPE: LocalizedText =
    LocalizedText::new("炭疽病/霜霉病", "Anthracnose / downy mildew");
const DISEASE_SPRAY: LocalizedText = LocalizedText::new(
    "建议喷施多菌灵或代森锰锌",
    "Spray carbendazim or mancozeb",
);
const DISEASE_REMOVE: LocalizedText = LocalizedText::new(
    "及时清除病果，防止传染",
    "Remove diseased fruit promptly to stop the spread",
);
const PEST_TYPE: LocalizedText =
    LocalizedText::new("荔枝霜疫霉/炭疽病", "Lychee downy blight / anthracnose");
const PEST_TREAT: LocalizedText =
    LocalizedText::new("建议使用吡虫啉防治", "Treat with imidacloprid");
const PEST_VENTILATE: LocalizedText = LocalizedText::new(
    "加强果园通风透光",
    "Improve orchard ventilation and light",
);
const MINOR_SPOTS: LocalizedText = LocalizedText::new(
    "发现少量病斑，建议加强管理",
    "Minor spots found, strengthen orchard management",
);
const NOT_RIPE: LocalizedText = LocalizedText::new(
    "果实未成熟，建议7-10天后采收",
    "Not yet ripe, recommend waiting 7-10 days before harvesting",
);
const RIPE_NOW: LocalizedText = LocalizedText::new(
    "果实已成熟，建议及时采收",
    "Ripe, recommend harvesting now",
);

/// Options for a single analysis call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub max_edge: u32,
    pub language: Language,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_edge: DEFAULT_MAX_EDGE,
            language: Language::default(),
        }
    }
}

/// Health verdict with its fixed texts
#[derive(Debug, Clone, PartialEq)]
pub struct HealthAssessment {
    pub status: HealthStatus,
    pub disease_type: Option<String>,
    pub pest_type: Option<String>,
    pub recommendations: Vec<String>,
}

/// Dimensions after shrinking the longer edge to `max_edge`.
///
/// Images already within bounds are returned unchanged. Fractional sizes are
/// truncated, with a floor of one pixel.
pub fn downscaled_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let max_edge = max_edge.max(1);
    let scale = |short: u32, long: u32| -> u32 {
        ((f64::from(short) * f64::from(max_edge) / f64::from(long)) as u32).max(1)
    };

    if width > height {
        if width > max_edge {
            return (max_edge, scale(height, width));
        }
    } else if height > max_edge {
        return (scale(width, height), max_edge);
    }
    (width, height)
}

/// Ripeness score in [0, 100] from the average color.
///
/// Red hues with enough saturation score high; hues past yellow lose two
/// points per degree. Desaturated red-yellow scores zero.
pub fn ripeness_score(hsv: Hsv) -> f64 {
    if (0.0..=50.0).contains(&hsv.h) && hsv.s >= 30.0 {
        (50.0 + (50.0 - hsv.h) + hsv.s * 0.3).clamp(0.0, 100.0)
    } else if hsv.h > 50.0 {
        (100.0 - (hsv.h - 50.0) * 2.0).max(0.0)
    } else {
        0.0
    }
}

/// Classify health from the detector ratios. First match wins:
/// heavy spotting, then pest damage, then light spotting.
pub fn classify_health(spot_ratio: f64, pest_damage_ratio: f64, language: Language) -> HealthAssessment {
    let texts = |items: &[LocalizedText]| -> Vec<String> {
        items.iter().map(|t| t.get(language).to_string()).collect()
    };

    if spot_ratio > DISEASE_SPOT_RATIO {
        HealthAssessment {
            status: HealthStatus::Diseased,
            disease_type: Some(DISEASE_TYPE.get(language).to_string()),
            pest_type: None,
            recommendations: texts(&[DISEASE_SPRAY, DISEASE_REMOVE]),
        }
    } else if pest_damage_ratio > PEST_DAMAGE_RATIO {
        HealthAssessment {
            status: HealthStatus::PestInfected,
            disease_type: None,
            pest_type: Some(PEST_TYPE.get(language).to_string()),
            recommendations: texts(&[PEST_TREAT, PEST_VENTILATE]),
        }
    } else if spot_ratio > MINOR_SPOT_RATIO {
        HealthAssessment {
            status: HealthStatus::Damaged,
            disease_type: None,
            pest_type: None,
            recommendations: texts(&[MINOR_SPOTS]),
        }
    } else {
        HealthAssessment {
            status: HealthStatus::Healthy,
            disease_type: None,
            pest_type: None,
            recommendations: Vec::new(),
        }
    }
}

/// Harvest timing advice for very low or very high scores
pub fn ripeness_recommendation(score: f64, language: Language) -> Option<&'static str> {
    if score < 30.0 {
        Some(NOT_RIPE.get(language))
    } else if score > 80.0 {
        Some(RIPE_NOW.get(language))
    } else {
        None
    }
}

/// Confidence in [0, 95], falling as more pixels look damaged
pub fn analysis_confidence(spot_ratio: f64, pest_damage_ratio: f64) -> f64 {
    (60.0 + (1.0 - spot_ratio - pest_damage_ratio) * 40.0).clamp(0.0, 95.0)
}

/// Analyze an already decoded and downscaled pixel buffer
pub fn analyze_pixels(buffer: &PixelBuffer<'_>, language: Language) -> AnalysisResult {
    let hsv = Hsv::from(average_color(buffer));
    let spot_ratio = detect_spot_ratio(buffer);
    let pest_damage_ratio = detect_pest_damage_ratio(buffer);

    let score = ripeness_score(hsv);
    let health = classify_health(spot_ratio, pest_damage_ratio, language);

    let mut recommendations = health.recommendations;
    if let Some(advice) = ripeness_recommendation(score, language) {
        recommendations.push(advice.to_string());
    }

    AnalysisResult {
        ripeness_score: score.round() as u8,
        health_status: health.status,
        disease_type: health.disease_type,
        pest_type: health.pest_type,
        confidence: analysis_confidence(spot_ratio, pest_damage_ratio).round() as u8,
        recommendations,
    }
}

/// Decode PNG or JPEG bytes, downscale, and analyze
pub fn analyze_image(bytes: &[u8], options: &AnalysisOptions) -> CoreResult<AnalysisResult> {
    let img = image::load_from_memory(bytes).map_err(|e| CoreError::ImageDecode(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidInput("Image has no pixels".to_string()));
    }

    let (target_w, target_h) = downscaled_dimensions(width, height, options.max_edge);
    let img = if (target_w, target_h) == (width, height) {
        img
    } else {
        img.resize_exact(target_w, target_h, FilterType::Triangle)
    };

    let rgba = img.to_rgba8();
    let buffer = PixelBuffer::new(rgba.width(), rgba.height(), rgba.as_raw())?;
    Ok(analyze_pixels(&buffer, options.language))
}

/// Stateless analyzer bound to a set of options
#[derive(Debug, Clone, Default)]
pub struct ImageHeuristicAnalyzer {
    options: AnalysisOptions,
}

impl ImageHeuristicAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn analyze(&self, bytes: &[u8]) -> CoreResult<AnalysisResult> {
        analyze_image(bytes, &self.options)
    }

    pub fn analyze_pixels(&self, buffer: &PixelBuffer<'_>) -> AnalysisResult {
        analyze_pixels(buffer, self.options.language)
    }
}
