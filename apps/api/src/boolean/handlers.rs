//! Axum route handlers for boolean search generation and validation.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::boolean::{validate_boolean_search, BooleanValidation};
use crate::errors::AppError;
use crate::extraction::{SkillRecord, SkillSource};
use crate::state::AppState;

/// Clients may send bare names or full records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    Name(String),
    Record(SkillRecord),
}

impl From<SkillInput> for SkillRecord {
    fn from(input: SkillInput) -> Self {
        match input {
            SkillInput::Name(name) => SkillRecord::new(name, 1.0, SkillSource::External),
            SkillInput::Record(record) => record,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BooleanSearchRequest {
    pub skills: Vec<SkillInput>,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct BooleanSearchResponse {
    pub boolean_search: String,
    pub validation: BooleanValidation,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub boolean_search: String,
}

/// POST /api/boolean-search
pub async fn handle_boolean_search(
    State(state): State<AppState>,
    payload: Result<Json<BooleanSearchRequest>, JsonRejection>,
) -> Result<Json<BooleanSearchResponse>, AppError> {
    let Json(request) = payload?;
    let skills: Vec<SkillRecord> = request.skills.into_iter().map(SkillRecord::from).collect();
    if skills.is_empty() {
        return Err(AppError::Validation("At least one skill is required".to_string()));
    }

    let boolean_search = state
        .boolean_generator
        .generate_boolean_search(&skills, &request.job_title)
        .await;
    let validation = validate_boolean_search(&boolean_search);

    Ok(Json(BooleanSearchResponse {
        boolean_search,
        validation,
    }))
}

/// POST /api/boolean-search/validate
pub async fn handle_validate_boolean(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<BooleanValidation>, AppError> {
    let Json(request) = payload?;
    Ok(Json(validate_boolean_search(&request.boolean_search)))
}
