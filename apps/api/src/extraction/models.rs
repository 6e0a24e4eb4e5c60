use std::fmt;

use serde::{Deserialize, Serialize};

/// Which strategy produced a skill record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    AiDynamicAnalysis,
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    TechContext,
    RoleTech,
    YearsExperience,
    BulletTech,
    DirectTech,
    KeywordMatch,
    /// Records supplied by a client rather than extracted here.
    #[serde(other)]
    External,
}

/// An extracted technology/tool name with a confidence in [0, 1] and its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default = "default_source")]
    pub source: SkillSource,
    /// Precomputed boolean string from the dynamic analysis, passed through unchanged by
    /// the boolean generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_boolean_string: Option<String>,
}

fn default_source() -> SkillSource {
    SkillSource::External
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, confidence: f64, source: SkillSource) -> Self {
        Self {
            name: name.into(),
            confidence,
            source,
            ai_boolean_string: None,
        }
    }
}

/// The cascade stage that settled the result, reported to clients as `extraction_method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    AiDynamicAnalysis,
    GeminiAi,
    OpenaiAi,
    IntelligentPatterns,
    BasicExtraction,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::AiDynamicAnalysis => "ai_dynamic_analysis",
            ExtractionMethod::GeminiAi => "gemini_ai",
            ExtractionMethod::OpenaiAi => "openai_ai",
            ExtractionMethod::IntelligentPatterns => "intelligent_patterns",
            ExtractionMethod::BasicExtraction => "basic_extraction",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
