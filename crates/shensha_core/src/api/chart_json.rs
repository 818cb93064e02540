//! JSON API for chart evaluation
//!
//! This module provides JSON-based endpoints for the UI layer and for
//! worker-thread offloading: evaluate a chart, list the catalog.

use super::{ApiError, ApiResponse};
use crate::catalog::{standard_catalog, Catalog, Category, RarityTier, ShenshaElement};
use crate::chart::{Chart, ElementBalance};
use crate::error::ShenshaError;
use crate::evaluator::{Evaluator, MatchResult};
use crate::stats::Statistics;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// 차트 입력 - 구조화된 객체 또는 텍스트 ("甲子 乙丑 丙寅 丁卯")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ChartInput {
    Text(String),
    Structured(Chart),
}

impl ChartInput {
    pub fn resolve(&self) -> Result<Chart, ShenshaError> {
        match self {
            ChartInput::Text(text) => text.parse(),
            ChartInput::Structured(chart) => Ok(*chart),
        }
    }
}

/// Chart evaluation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChartEvaluationRequest {
    pub schema_version: Option<String>,
    pub chart: ChartInput,
    /// 지정 시 해당 규칙만 평가
    #[serde(default)]
    pub rule_ids: Option<Vec<String>>,
}

/// Chart evaluation response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChartEvaluationResponse {
    pub chart: Chart,
    pub matches: Vec<MatchResult>,
    pub statistics: Statistics,
    pub element_balance: ElementBalance,
}

/// 카탈로그 항목 메타데이터 (판정 함수 제외)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RuleInfo {
    pub id: String,
    pub display_name: String,
    pub english_name: String,
    pub description: String,
    pub category: Category,
    pub element: ShenshaElement,
    pub power: u8,
    pub rarity: RarityTier,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogResponse {
    pub rules: Vec<RuleInfo>,
    pub statistics: Statistics,
}

fn evaluate_request(
    catalog: &Catalog,
    request: &ChartEvaluationRequest,
) -> Result<ChartEvaluationResponse, ShenshaError> {
    let chart = request.chart.resolve()?;
    let evaluator = Evaluator::new(catalog);

    let matches = match &request.rule_ids {
        Some(ids) => evaluator.evaluate_selected(ids.as_slice(), &chart)?,
        None => evaluator.evaluate_all(&chart),
    };

    Ok(ChartEvaluationResponse {
        chart,
        statistics: Statistics::from_results(&matches),
        element_balance: chart.element_balance(),
        matches,
    })
}

/// Evaluate a chart against the standard catalog
///
/// # Arguments
/// * `request_json` - JSON string containing ChartEvaluationRequest
///
/// # Returns
/// JSON string containing ApiResponse<ChartEvaluationResponse>
pub fn evaluate_chart_json(request_json: &str) -> String {
    evaluate_chart_json_with(standard_catalog(), request_json)
}

pub fn evaluate_chart_json_with(catalog: &Catalog, request_json: &str) -> String {
    let request: ChartEvaluationRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            warn!("Failed to parse ChartEvaluationRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return ApiResponse::<ChartEvaluationResponse>::error(error).to_json();
        }
    };

    match evaluate_request(catalog, &request) {
        Ok(response) => {
            info!(chart = %response.chart, matched = response.matches.len(), "chart evaluated");
            ApiResponse::success(response).to_json()
        }
        Err(err) => {
            warn!("Chart evaluation rejected: {}", err);
            ApiResponse::<ChartEvaluationResponse>::error(ApiError::from(&err)).to_json()
        }
    }
}

/// List the standard catalog with statistics
pub fn catalog_json() -> String {
    catalog_json_with(standard_catalog())
}

pub fn catalog_json_with(catalog: &Catalog) -> String {
    let rules = catalog
        .iter()
        .map(|rule| RuleInfo {
            id: rule.id.to_string(),
            display_name: rule.display_name.to_string(),
            english_name: rule.english_name.to_string(),
            description: rule.description.to_string(),
            category: rule.category,
            element: rule.element,
            power: rule.power,
            rarity: rule.rarity(),
        })
        .collect();

    let response = CatalogResponse { rules, statistics: Statistics::from_catalog(catalog) };
    ApiResponse::success(response).to_json()
}

pub fn request_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(ChartEvaluationRequest)
}

pub fn response_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(ChartEvaluationResponse)
}
