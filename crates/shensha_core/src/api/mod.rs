//! JSON API
//!
//! UI 스레드 / 워커 경계용 JSON 엔드포인트.
//! 판정 함수는 경계를 넘지 않으며, 차트와 결과만 평범한 데이터로 오간다.

pub mod chart_json;

pub use chart_json::{
    catalog_json, catalog_json_with, evaluate_chart_json, evaluate_chart_json_with,
    request_schema, response_schema, CatalogResponse, ChartEvaluationRequest,
    ChartEvaluationResponse, ChartInput, RuleInfo,
};

use crate::error::ShenshaError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl From<&ShenshaError> for ApiError {
    fn from(err: &ShenshaError) -> Self {
        ApiError::new(err.code(), &err.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
