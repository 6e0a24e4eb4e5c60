//! The stages of the extraction cascade.
//!
//! Each stage is a `SkillStrategy`. The extractor runs them in order and stops once enough
//! skills have accumulated; a stage error is logged and the next stage runs.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::extraction::dynamic::{AnalysisError, DynamicAnalysis, DynamicRecruiterTool, DYNAMIC_METHOD};
use crate::extraction::models::{ExtractionMethod, SkillRecord, SkillSource};
use crate::extraction::patterns::{basic_extraction, extract_intelligent_patterns};
use crate::extraction::prompts::skill_list_prompt;
use crate::extraction::technical::is_technical_skill;
use crate::llm_client::payload::clean_skill_line;
use crate::llm_client::{LlmError, PromptRequest, Provider, TextGenerator};

pub const DYNAMIC_CONFIDENCE: f64 = 0.95;
pub const PRIMARY_LIST_CONFIDENCE: f64 = 0.9;
pub const SECONDARY_LIST_CONFIDENCE: f64 = 0.85;

/// Most skills kept from one provider's line list.
pub const MAX_LIST_SKILLS: usize = 7;

const LIST_MAX_TOKENS: u32 = 200;
const LIST_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("{0} produced no usable answer")]
    Unusable(&'static str),
}

/// What one stage contributed.
#[derive(Debug, Default)]
pub struct StageOutput {
    pub skills: Vec<SkillRecord>,
    /// Set only by the dynamic stage, when the provider's analysis validated.
    pub dynamic_analysis: Option<DynamicAnalysis>,
}

impl From<Vec<SkillRecord>> for StageOutput {
    fn from(skills: Vec<SkillRecord>) -> Self {
        Self {
            skills,
            dynamic_analysis: None,
        }
    }
}

#[async_trait]
pub trait SkillStrategy: Send + Sync {
    /// Reported as the extraction method when this stage settles the result.
    fn method(&self) -> ExtractionMethod;

    async fn extract(&self, description: &str, title: &str) -> Result<StageOutput, StrategyError>;
}

// ──────────────────────────────────────────────
// Dynamic analysis
// ──────────────────────────────────────────────

pub struct DynamicAnalysisStrategy {
    tool: DynamicRecruiterTool,
}

impl DynamicAnalysisStrategy {
    pub fn new(tool: DynamicRecruiterTool) -> Self {
        Self { tool }
    }
}

#[async_trait]
impl SkillStrategy for DynamicAnalysisStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::AiDynamicAnalysis
    }

    async fn extract(&self, description: &str, title: &str) -> Result<StageOutput, StrategyError> {
        let analysis = self.tool.analyze(description, title).await?;
        if analysis.extraction_method != DYNAMIC_METHOD {
            return Err(StrategyError::Unusable("dynamic analysis"));
        }

        let boolean = Some(analysis.boolean_string.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_string);

        let skills = analysis
            .skills
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| SkillRecord {
                ai_boolean_string: boolean.clone(),
                ..SkillRecord::new(s.name.trim(), DYNAMIC_CONFIDENCE, SkillSource::AiDynamicAnalysis)
            })
            .collect();

        Ok(StageOutput {
            skills,
            dynamic_analysis: Some(analysis),
        })
    }
}

// ──────────────────────────────────────────────
// Provider line lists
// ──────────────────────────────────────────────

/// Asks one provider for a plain list of skills, one per line.
pub struct LlmListStrategy {
    generator: Arc<dyn TextGenerator>,
    confidence: f64,
}

impl LlmListStrategy {
    pub fn primary(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            confidence: PRIMARY_LIST_CONFIDENCE,
        }
    }

    pub fn secondary(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            confidence: SECONDARY_LIST_CONFIDENCE,
        }
    }

    fn source(&self) -> SkillSource {
        match self.generator.provider() {
            Provider::Gemini => SkillSource::Gemini,
            Provider::OpenAi => SkillSource::OpenAi,
        }
    }
}

/// Keeps list lines that read as technical skills, up to `MAX_LIST_SKILLS`.
pub fn parse_skill_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(clean_skill_line)
        .filter(|line| line.chars().count() > 2 && is_technical_skill(line))
        .take(MAX_LIST_SKILLS)
        .collect()
}

#[async_trait]
impl SkillStrategy for LlmListStrategy {
    fn method(&self) -> ExtractionMethod {
        match self.generator.provider() {
            Provider::Gemini => ExtractionMethod::GeminiAi,
            Provider::OpenAi => ExtractionMethod::OpenaiAi,
        }
    }

    async fn extract(&self, description: &str, title: &str) -> Result<StageOutput, StrategyError> {
        let prompt = skill_list_prompt(description, title);
        let request = PromptRequest::new(&prompt)
            .with_max_tokens(LIST_MAX_TOKENS)
            .with_temperature(LIST_TEMPERATURE);
        let text = self.generator.generate(&request).await?;

        let source = self.source();
        let skills = parse_skill_lines(&text)
            .into_iter()
            .map(|name| SkillRecord::new(name, self.confidence, source))
            .collect::<Vec<_>>();

        tracing::debug!(
            "{} listed {} skills",
            self.generator.provider(),
            skills.len()
        );
        Ok(skills.into())
    }
}

// ──────────────────────────────────────────────
// Local fallbacks
// ──────────────────────────────────────────────

pub struct PatternStrategy;

#[async_trait]
impl SkillStrategy for PatternStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::IntelligentPatterns
    }

    async fn extract(&self, description: &str, _title: &str) -> Result<StageOutput, StrategyError> {
        Ok(extract_intelligent_patterns(description).into())
    }
}

pub struct KeywordStrategy;

#[async_trait]
impl SkillStrategy for KeywordStrategy {
    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::BasicExtraction
    }

    async fn extract(&self, description: &str, _title: &str) -> Result<StageOutput, StrategyError> {
        Ok(basic_extraction(description).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    #[test]
    fn test_parse_skill_lines_cleans_and_filters() {
        let text = "- Python\n* Docker\n• Kubernetes\nCommunication\n\nGo\nthe team\nAWS";
        assert_eq!(
            parse_skill_lines(text),
            vec!["Python", "Docker", "Kubernetes", "AWS"]
        );
    }

    #[test]
    fn test_parse_skill_lines_caps_at_seven() {
        let text = "Python\nJava\nRust\nDocker\nKubernetes\nTerraform\nAnsible\nJenkins\nLinux";
        assert_eq!(parse_skill_lines(text).len(), 7);
    }

    #[tokio::test]
    async fn test_list_strategy_tags_provider() {
        let generator = Arc::new(ScriptedGenerator::ok(Provider::OpenAi, "Python\nDocker"));
        let strategy = LlmListStrategy::secondary(generator);
        assert_eq!(strategy.method(), ExtractionMethod::OpenaiAi);

        let output = strategy.extract("jd", "title").await.unwrap();
        assert_eq!(output.skills.len(), 2);
        assert!(output
            .skills
            .iter()
            .all(|s| s.source == SkillSource::OpenAi && s.confidence == 0.85));
        assert!(output.dynamic_analysis.is_none());
    }

    #[tokio::test]
    async fn test_list_strategy_propagates_provider_error() {
        let generator = Arc::new(ScriptedGenerator::failing(Provider::Gemini, 429));
        let strategy = LlmListStrategy::primary(generator);
        let err = strategy.extract("jd", "").await.unwrap_err();
        assert!(matches!(err, StrategyError::Llm(LlmError::Api { status: 429, .. })));
    }

    #[tokio::test]
    async fn test_dynamic_strategy_attaches_boolean_string() {
        let answer = r#"{"skills": [{"name": "Workday"}, {"name": " "}, {"name": "SQL"}],
            "keySkillContext": "Workday first.", "booleanString": "\"Workday\" AND \"SQL\""}"#;
        let generator = Arc::new(ScriptedGenerator::ok(Provider::Gemini, answer));
        let tool = DynamicRecruiterTool::new(Some(generator)).unwrap();
        let output = DynamicAnalysisStrategy::new(tool)
            .extract("jd", "")
            .await
            .unwrap();

        assert_eq!(output.skills.len(), 2);
        assert_eq!(output.skills[0].confidence, 0.95);
        assert_eq!(output.skills[0].source, SkillSource::AiDynamicAnalysis);
        assert_eq!(
            output.skills[1].ai_boolean_string.as_deref(),
            Some(r#""Workday" AND "SQL""#)
        );
        assert!(output.dynamic_analysis.is_some());
    }

    #[tokio::test]
    async fn test_dynamic_strategy_rejects_other_methods() {
        let answer = r#"{"skills": [{"name": "Go"}], "keySkillContext": "x",
            "booleanString": "", "extractionMethod": "ai_failed"}"#;
        let generator = Arc::new(ScriptedGenerator::ok(Provider::Gemini, answer));
        let tool = DynamicRecruiterTool::new(Some(generator)).unwrap();
        let err = DynamicAnalysisStrategy::new(tool)
            .extract("jd", "")
            .await
            .unwrap_err();
        assert!(matches!(err, StrategyError::Unusable(_)));
    }
}
