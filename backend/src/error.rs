//! Error handling for the Lychee Guard service
//!
//! Provides consistent error responses in Chinese and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::CoreError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Calculator errors
    #[error(transparent)]
    Core(#[from] CoreError),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_zh: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_zh: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

fn core_error_response(err: &CoreError) -> (StatusCode, ErrorDetail) {
    let code = err.code().to_string();
    match err {
        CoreError::InvalidInput(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorDetail {
                code,
                message_en: msg.clone(),
                message_zh: format!("输入数据无效: {}", msg),
                field: None,
            },
        ),
        CoreError::ImageDecode(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorDetail {
                code,
                message_en: format!("Failed to load image: {}", msg),
                message_zh: "图片加载失败".to_string(),
                field: None,
            },
        ),
        CoreError::RenderContext(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorDetail {
                code,
                message_en: format!("Failed to get canvas context: {}", msg),
                message_zh: "无法获取画布上下文".to_string(),
                field: None,
            },
        ),
        CoreError::InvalidPolicyParameters { field, message } => (
            StatusCode::BAD_REQUEST,
            ErrorDetail {
                code,
                message_en: message.clone(),
                message_zh: format!("保单参数无效: {}", field),
                field: Some(field.clone()),
            },
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Core(err) => core_error_response(err),
            AppError::Validation {
                field,
                message,
                message_zh,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_zh: message_zh.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_zh: format!("未找到 {}", resource),
                    field: None,
                },
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorDetail {
                    code: "PAYLOAD_TOO_LARGE".to_string(),
                    message_en: msg.clone(),
                    message_zh: "上传文件过大".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_zh: "服务器内部错误".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
