//! Axum route handlers for job email detection.

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::detection::{get_job_context, DetectionDetails, JobContext, JobEmailDetector};
use crate::errors::AppError;

/// Body sent by the mail client. Older callers send `content`, the extension sends
/// `email_content`.
#[derive(Debug, Deserialize)]
pub struct DetectJobEmailRequest {
    #[serde(default, alias = "email_content")]
    pub content: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: String,
}

#[derive(Debug, Serialize)]
pub struct DetectJobEmailResponse {
    pub success: bool,
    pub data: JobEmailData,
}

#[derive(Debug, Serialize)]
pub struct JobEmailData {
    pub is_job_email: bool,
    pub confidence: f64,
    /// Extracted regardless of the verdict, for the preview card.
    pub context: JobContext,
    pub detection_details: DetectionDetails,
}

/// POST /api/detect-job-email
///
/// Scores an email and returns the verdict with the extracted job context.
pub async fn handle_detect_job_email(
    payload: Result<Json<DetectJobEmailRequest>, JsonRejection>,
) -> Result<Json<DetectJobEmailResponse>, AppError> {
    let Json(request) = payload?;
    if request.content.trim().is_empty() && request.subject.trim().is_empty() {
        return Err(AppError::Validation(
            "Email content or subject is required".to_string(),
        ));
    }

    let detection =
        JobEmailDetector.is_job_email(&request.content, &request.subject, &request.sender);
    let context = get_job_context(&request.content);

    tracing::debug!(
        "Job email detection: is_job={} confidence={:.2}",
        detection.is_job,
        detection.confidence
    );

    Ok(Json(DetectJobEmailResponse {
        success: true,
        data: JobEmailData {
            is_job_email: detection.is_job,
            confidence: detection.confidence,
            context,
            detection_details: detection.details,
        },
    }))
}
