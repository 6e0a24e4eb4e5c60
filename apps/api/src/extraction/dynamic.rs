//! Dynamic recruiter analysis: one structured call that returns skills, a key-skill
//! sentence, a boolean search string and two screening questions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::extraction::prompts::dynamic_analysis_prompt;
use crate::llm_client::payload::{parse_structured, PayloadError};
use crate::llm_client::{LlmError, PromptRequest, Provider, TextGenerator};

pub const DYNAMIC_METHOD: &str = "ai_dynamic_analysis";
pub const FAILED_METHOD: &str = "ai_failed";

const MIN_QUESTION_LEN: usize = 10;

const DEFAULT_QUESTIONS: [&str; 2] = [
    "What technical challenges have you faced in your previous roles?",
    "How do you approach learning new technologies?",
];

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("AI response structure validation failed: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSkill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicAnalysis {
    pub skills: Vec<AnalysisSkill>,
    pub key_skill_context: String,
    pub boolean_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_questions: Option<Vec<String>>,
    #[serde(default = "default_method")]
    pub extraction_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_method() -> String {
    DYNAMIC_METHOD.to_string()
}

impl DynamicAnalysis {
    /// Degraded payload returned to clients when the analysis could not be produced.
    pub fn failed(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        Self {
            skills: Vec::new(),
            key_skill_context: format!("Could not analyze the job description. Error: {message}"),
            boolean_string: String::new(),
            ai_questions: Some(DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()),
            extraction_method: FAILED_METHOD.to_string(),
            error: Some(message),
        }
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if let Some(questions) = &self.ai_questions {
            if questions.len() != 2 {
                return Err(AnalysisError::Invalid("aiQuestions must hold exactly two entries"));
            }
            if questions
                .iter()
                .any(|q| q.trim().chars().count() < MIN_QUESTION_LEN)
            {
                return Err(AnalysisError::Invalid("aiQuestions entries are too short"));
            }
        }
        Ok(())
    }
}

/// Sends the recruiter prompt to the primary provider. There is no provider fallback here:
/// callers fall through to their own next strategy.
pub struct DynamicRecruiterTool {
    generator: Arc<dyn TextGenerator>,
}

impl DynamicRecruiterTool {
    pub fn new(primary: Option<Arc<dyn TextGenerator>>) -> Result<Self, LlmError> {
        let generator = primary.ok_or(LlmError::MissingApiKey(Provider::Gemini))?;
        Ok(Self { generator })
    }

    pub async fn analyze(
        &self,
        description: &str,
        title: &str,
    ) -> Result<DynamicAnalysis, AnalysisError> {
        let prompt = dynamic_analysis_prompt(description, title);
        let raw = self.generator.generate(&PromptRequest::new(&prompt)).await?;

        let analysis: DynamicAnalysis = parse_structured(&raw)?;
        analysis.validate()?;

        info!(
            "Dynamic analysis returned {} skills via {}",
            analysis.skills.len(),
            self.generator.provider()
        );
        debug!(
            "Dynamic analysis skills: {:?}",
            analysis.skills.iter().map(|s| &s.name).collect::<Vec<_>>()
        );
        Ok(analysis)
    }

    /// Like `analyze`, but folds any failure into `DynamicAnalysis::failed`.
    pub async fn analyze_or_degraded(&self, description: &str, title: &str) -> DynamicAnalysis {
        match self.analyze(description, title).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("Dynamic analysis failed: {e}");
                DynamicAnalysis::failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    const VALID: &str = r#"```json
{
  "skills": [
    {"name": "Workday HCM", "confidence": 0.9, "source": "ai_analysis"},
    {"name": "SQL", "confidence": 0.8, "source": "ai_analysis"},
    {"name": "ETL"}
  ],
  "keySkillContext": "Workday HCM data conversion is the core requirement.",
  "booleanString": "(\"Workday HCM\" OR \"HRIS\") AND \"SQL\" AND \"ETL\"",
  "aiQuestions": [
    "Walk me through a Workday data conversion you led end to end.",
    "Tell me about a migration that slipped and how you recovered it."
  ]
}
```"#;

    fn tool(answer: &str) -> (Arc<ScriptedGenerator>, DynamicRecruiterTool) {
        let generator = Arc::new(ScriptedGenerator::ok(Provider::Gemini, answer));
        let tool = DynamicRecruiterTool::new(Some(generator.clone())).unwrap();
        (generator, tool)
    }

    #[test]
    fn test_new_without_primary_reports_missing_key() {
        let err = DynamicRecruiterTool::new(None).err().unwrap();
        assert_eq!(err.to_string(), "Gemini API key is not configured");
    }

    #[tokio::test]
    async fn test_valid_answer_is_parsed_and_defaults_method() {
        let (generator, tool) = tool(VALID);
        let analysis = tool.analyze("Workday conversion role", "Specialist").await.unwrap();

        assert_eq!(analysis.skills.len(), 3);
        assert_eq!(analysis.skills[2].confidence, None);
        assert_eq!(analysis.extraction_method, "ai_dynamic_analysis");
        assert!(generator.prompts()[0].contains("Job Title: Specialist"));
    }

    #[tokio::test]
    async fn test_missing_required_key_is_rejected() {
        let (_, tool) = tool(r#"{"skills": [], "keySkillContext": "x"}"#);
        let err = tool.analyze("jd", "").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Payload(_)));
    }

    #[tokio::test]
    async fn test_skill_without_name_is_rejected() {
        let (_, tool) = tool(
            r#"{"skills": [{"confidence": 0.9}], "keySkillContext": "x", "booleanString": ""}"#,
        );
        assert!(tool.analyze("jd", "").await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_question_count_is_rejected() {
        let (_, tool) = tool(
            r#"{"skills": [{"name": "Go"}], "keySkillContext": "x", "booleanString": "\"Go\"",
                "aiQuestions": ["Tell me about your Go services in production."]}"#,
        );
        let err = tool.analyze("jd", "").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_short_question_is_rejected() {
        let (_, tool) = tool(
            r#"{"skills": [{"name": "Go"}], "keySkillContext": "x", "booleanString": "\"Go\"",
                "aiQuestions": ["Tell me about your Go services in production.", "  Why?   "]}"#,
        );
        assert!(matches!(
            tool.analyze("jd", "").await.unwrap_err(),
            AnalysisError::Invalid(_)
        ));
    }

    #[tokio::test]
    async fn test_provider_failure_degrades() {
        let generator = Arc::new(ScriptedGenerator::failing(Provider::Gemini, 503));
        let tool = DynamicRecruiterTool::new(Some(generator)).unwrap();
        let analysis = tool.analyze_or_degraded("jd", "").await;

        assert_eq!(analysis.extraction_method, "ai_failed");
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.boolean_string, "");
        assert_eq!(analysis.ai_questions.as_ref().map(Vec::len), Some(2));
        assert!(analysis.error.is_some());
    }

    #[test]
    fn test_failed_payload_serializes_camel_case() {
        let value = serde_json::to_value(DynamicAnalysis::failed("boom")).unwrap();
        assert_eq!(value["extractionMethod"], "ai_failed");
        assert_eq!(value["error"], "boom");
        assert_eq!(
            value["keySkillContext"],
            "Could not analyze the job description. Error: boom"
        );
        assert_eq!(value["aiQuestions"].as_array().unwrap().len(), 2);
    }
}
