//! Analysis pipeline: the full job-description pass behind `/api/analyze-jd`.
//!
//! detection → skill extraction → boolean search. A validated dynamic analysis supplies
//! the key-skill sentence and, when it produced one, the boolean string.

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::boolean::BooleanGenerator;
use crate::detection::{get_job_context, DetectionResult, JobContext, JobEmailDetector};
use crate::extraction::{ExtractionMethod, SkillExtractor, SkillRecord};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisData {
    pub skills: Vec<SkillRecord>,
    pub boolean_search: String,
    pub extraction_method: ExtractionMethod,
    /// Key-skill sentence from the dynamic analysis; empty when that stage did not run.
    pub ai_context: String,
    pub ai_boolean_used: bool,
    pub job_detection: DetectionResult,
    pub job_context: JobContext,
}

pub async fn analyze_job_description(
    extractor: &SkillExtractor,
    boolean_generator: &BooleanGenerator,
    request: &AnalysisRequest,
) -> AnalysisData {
    let description = request.job_description.as_str();
    let title = request.job_title.as_str();

    let job_detection =
        JobEmailDetector.is_job_email(description, &request.subject, &request.sender);
    let job_context = get_job_context(description);

    let outcome = extractor.extract_skills(description, title).await;

    let (ai_context, ai_boolean) = match &outcome.dynamic_analysis {
        Some(analysis) => (
            analysis.key_skill_context.clone(),
            analysis.boolean_string.trim().to_string(),
        ),
        None => (String::new(), String::new()),
    };

    let ai_boolean_used = !ai_boolean.is_empty();
    let boolean_search = if ai_boolean_used {
        ai_boolean
    } else {
        boolean_generator
            .generate_boolean_search(&outcome.skills, title)
            .await
    };

    info!(
        "Analyzed job description: {} skills via {}, ai_boolean_used={}",
        outcome.skills.len(),
        outcome.method,
        ai_boolean_used
    );

    AnalysisData {
        skills: outcome.skills,
        boolean_search,
        extraction_method: outcome.method,
        ai_context,
        ai_boolean_used,
        job_detection,
        job_context,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::llm_client::{LlmProviders, Provider};

    fn request(description: &str, title: &str) -> AnalysisRequest {
        AnalysisRequest {
            job_title: title.to_string(),
            job_description: description.to_string(),
            subject: String::new(),
            sender: String::new(),
        }
    }

    async fn run(providers: &LlmProviders, req: &AnalysisRequest) -> AnalysisData {
        let extractor = SkillExtractor::new(providers);
        let booleans = BooleanGenerator::new(providers);
        analyze_job_description(&extractor, &booleans, req).await
    }

    #[tokio::test]
    async fn test_offline_pipeline_uses_patterns_and_title_table() {
        let req = request(
            "Looking for a React Developer with JavaScript and TypeScript experience.",
            "React Developer",
        );
        let data = run(&LlmProviders::default(), &req).await;

        assert_eq!(data.extraction_method, ExtractionMethod::IntelligentPatterns);
        assert_eq!(data.skills.len(), 3);
        assert_eq!(
            data.boolean_search,
            r#""React" AND ("JavaScript" OR "TypeScript" OR "Frontend")"#
        );
        assert!(!data.ai_boolean_used);
        assert_eq!(data.ai_context, "");
        assert_eq!(
            data.job_context.job_title,
            "A React Developer With Javascript And Typescript Experience."
        );
    }

    #[tokio::test]
    async fn test_dynamic_boolean_is_reused_without_second_call() {
        let answer = r#"{
            "skills": [{"name": "Shopify"}, {"name": "React"}, {"name": "GraphQL"}],
            "keySkillContext": "Shopify storefront work in React is the core of the role.",
            "booleanString": "\"Shopify\" AND (\"React\" OR \"Hydrogen\") AND \"GraphQL\""
        }"#;
        let primary = Arc::new(ScriptedGenerator::ok(Provider::Gemini, answer));
        let providers = LlmProviders {
            primary: Some(primary.clone()),
            secondary: None,
        };
        let data = run(&providers, &request("Shopify storefront contract", "")).await;

        assert_eq!(data.extraction_method, ExtractionMethod::AiDynamicAnalysis);
        assert!(data.ai_boolean_used);
        assert_eq!(
            data.boolean_search,
            r#""Shopify" AND ("React" OR "Hydrogen") AND "GraphQL""#
        );
        assert_eq!(
            data.ai_context,
            "Shopify storefront work in React is the core of the role."
        );
        assert_eq!(primary.calls(), 1);
    }

    #[tokio::test]
    async fn test_detection_is_reported() {
        let mut req = request(
            "Client need: we are looking for a developer. Bill rate is $70/hr. Python and Docker.",
            "",
        );
        req.sender = "recruiter@staffing.com".to_string();
        let data = run(&LlmProviders::default(), &req).await;

        assert!(data.job_detection.is_job);
        assert!(data
            .job_detection
            .details
            .sender_indicators
            .contains(&"recruiter".to_string()));
    }
}
