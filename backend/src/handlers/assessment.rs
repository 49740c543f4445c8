//! HTTP handlers for fruit assessment endpoints

use axum::{extract::State, Json};
use shared::{AssessmentRecord, AssessmentStats};

use crate::error::AppResult;
use crate::services::assessment::{AnalyzeImageInput, AnalyzeImageResponse, AssessmentService};
use crate::AppState;

/// Analyze an uploaded fruit photo
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeImageInput>,
) -> AppResult<Json<AnalyzeImageResponse>> {
    let service = AssessmentService::new(state.config.analysis.clone());
    let response = service.analyze(input).await?;
    Ok(Json(response))
}

/// Summarize an assessment history
pub async fn assessment_stats(
    State(state): State<AppState>,
    Json(records): Json<Vec<AssessmentRecord>>,
) -> AppResult<Json<AssessmentStats>> {
    let service = AssessmentService::new(state.config.analysis.clone());
    Ok(Json(service.stats(&records)))
}
