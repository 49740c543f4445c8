//! Fruit assessment service: image analysis and history statistics

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use shared::{
    analyze_image, summarize_assessments, AnalysisOptions, AnalysisResult, AssessmentRecord,
    AssessmentStats, Language, RipenessStage,
};

use crate::config::AnalysisConfig;
use crate::error::{AppError, AppResult};

/// Assessment service for analyzing uploaded fruit photos
#[derive(Clone)]
pub struct AssessmentService {
    config: AnalysisConfig,
}

/// Input for analyzing an image
#[derive(Debug, Deserialize)]
pub struct AnalyzeImageInput {
    /// Base64 image, optionally as a `data:` URL
    pub image_base64: String,
    #[serde(default)]
    pub language: Language,
}

/// Analysis result with display labels
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeImageResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub ripeness_stage: RipenessStage,
    pub ripeness_stage_label: String,
    pub health_label: String,
}

impl AssessmentService {
    /// Create a new AssessmentService instance
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Decode and analyze an uploaded image
    pub async fn analyze(&self, input: AnalyzeImageInput) -> AppResult<AnalyzeImageResponse> {
        let bytes = self.decode_upload(&input.image_base64)?;
        let options = AnalysisOptions {
            max_edge: self.config.max_edge_px,
            language: input.language,
        };

        tracing::debug!(
            bytes = bytes.len(),
            language = input.language.code(),
            "Analyzing uploaded image"
        );

        // Decoding and pixel scans are CPU bound
        let result = tokio::task::spawn_blocking(move || analyze_image(&bytes, &options))
            .await
            .map_err(|e| AppError::Internal(format!("Analysis task failed: {}", e)))??;

        tracing::info!(
            ripeness_score = result.ripeness_score,
            health_status = %result.health_status,
            confidence = result.confidence,
            "Image analysis completed"
        );

        let stage = result.ripeness_stage();
        Ok(AnalyzeImageResponse {
            ripeness_stage: stage,
            ripeness_stage_label: stage.label(input.language).to_string(),
            health_label: result.health_status.label(input.language).to_string(),
            result,
        })
    }

    /// Summarize an assessment history
    pub fn stats(&self, records: &[AssessmentRecord]) -> AssessmentStats {
        let stats = summarize_assessments(records);
        tracing::debug!(total = stats.total, "Summarized assessment history");
        stats
    }

    fn decode_upload(&self, image_base64: &str) -> AppResult<Vec<u8>> {
        let payload = strip_data_url(image_base64.trim());
        if payload.is_empty() {
            return Err(AppError::Validation {
                field: "image_base64".to_string(),
                message: "Image data is required".to_string(),
                message_zh: "请上传图片".to_string(),
            });
        }

        // base64 expands by 4/3, so reject before decoding
        if payload.len() / 4 * 3 > self.config.max_upload_bytes {
            return Err(self.too_large());
        }

        let bytes = STANDARD.decode(payload).map_err(|e| AppError::Validation {
            field: "image_base64".to_string(),
            message: format!("Invalid base64 image data: {}", e),
            message_zh: "图片数据格式错误".to_string(),
        })?;

        if bytes.len() > self.config.max_upload_bytes {
            return Err(self.too_large());
        }
        Ok(bytes)
    }

    fn too_large(&self) -> AppError {
        AppError::PayloadTooLarge(format!(
            "Image exceeds the {} byte limit",
            self.config.max_upload_bytes
        ))
    }
}

/// Strip a `data:image/...;base64,` prefix if present
fn strip_data_url(value: &str) -> &str {
    if value.starts_with("data:") {
        value.split_once(',').map(|(_, data)| data).unwrap_or("")
    } else {
        value
    }
}
