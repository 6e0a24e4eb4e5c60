//! Axum route handlers for skill context.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::boolean::handlers::SkillInput;
use crate::errors::AppError;
use crate::extraction::models::SkillRecord;
use crate::skill_context::{SkillContextEntry, SkillInsights};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillContextRequest {
    pub skills: Vec<SkillInput>,
}

#[derive(Debug, Serialize)]
pub struct SkillContextResponse {
    pub contexts: Vec<SkillContextEntry>,
    pub insights: SkillInsights,
}

/// POST /api/skill-context
///
/// Context and a probing question per skill, plus combination and market insights.
pub async fn handle_skill_context(
    State(state): State<AppState>,
    payload: Result<Json<SkillContextRequest>, JsonRejection>,
) -> Result<Json<SkillContextResponse>, AppError> {
    let Json(request) = payload?;
    let skills: Vec<SkillRecord> = request.skills.into_iter().map(SkillRecord::from).collect();
    if skills.is_empty() {
        return Err(AppError::Validation("At least one skill is required".to_string()));
    }

    let contexts = state.context_analyzer.get_skill_context(&skills).await;
    let insights = state.context_analyzer.get_skill_insights(&skills).await;

    Ok(Json(SkillContextResponse { contexts, insights }))
}
