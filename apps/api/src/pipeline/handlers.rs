//! Axum route handlers for job-description analysis.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::{DynamicAnalysis, DynamicRecruiterTool};
use crate::pipeline::{analyze_job_description, AnalysisData, AnalysisRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub data: AnalysisData,
}

#[derive(Debug, Deserialize)]
pub struct DynamicAnalysisRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub job_title: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-jd
///
/// Detection, skill extraction and boolean search for one job description.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = payload?;
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation("Job description is required".to_string()));
    }

    let data =
        analyze_job_description(&state.extractor, &state.boolean_generator, &request).await;

    Ok(Json(AnalysisResponse {
        success: true,
        data,
    }))
}

/// POST /api/dynamic-analysis
///
/// Raw dynamic analysis. A provider failure still answers 200 with the degraded payload;
/// a missing primary provider is a configuration error.
pub async fn handle_dynamic_analysis(
    State(state): State<AppState>,
    payload: Result<Json<DynamicAnalysisRequest>, JsonRejection>,
) -> Result<Json<DynamicAnalysis>, AppError> {
    let Json(request) = payload?;
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation("Job description is required".to_string()));
    }

    let tool = DynamicRecruiterTool::new(state.providers.primary.clone())
        .map_err(|e| AppError::Configuration(e.to_string()))?;
    tracing::debug!("Dynamic analysis via {}", state.config.gemini_model);

    let analysis = tool
        .analyze_or_degraded(&request.job_description, &request.job_title)
        .await;

    Ok(Json(analysis))
}
