//! Skill Extractor: runs the strategy cascade and shapes the final skill list.

use tracing::{debug, info, warn};

use crate::extraction::dynamic::{DynamicAnalysis, DynamicRecruiterTool};
use crate::extraction::models::{ExtractionMethod, SkillRecord};
use crate::extraction::strategies::{
    DynamicAnalysisStrategy, KeywordStrategy, LlmListStrategy, PatternStrategy, SkillStrategy,
};
use crate::extraction::technical::{deduplicate_and_rank, filter_generic_skills};
use crate::llm_client::LlmProviders;

/// A stage that brings the running total to this many skills settles the cascade.
pub const ENOUGH_SKILLS: usize = 3;

#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// At most five records, highest confidence first.
    pub skills: Vec<SkillRecord>,
    pub method: ExtractionMethod,
    /// The validated dynamic analysis, when that stage ran and succeeded.
    pub dynamic_analysis: Option<DynamicAnalysis>,
}

pub struct SkillExtractor {
    strategies: Vec<Box<dyn SkillStrategy>>,
}

impl SkillExtractor {
    /// Builds the cascade from the configured providers: dynamic analysis and the primary
    /// list stage when a primary provider exists, the secondary list stage when a secondary
    /// exists, then the local pattern and keyword stages.
    pub fn new(providers: &LlmProviders) -> Self {
        let mut strategies: Vec<Box<dyn SkillStrategy>> = Vec::new();

        match DynamicRecruiterTool::new(providers.primary.clone()) {
            Ok(tool) => strategies.push(Box::new(DynamicAnalysisStrategy::new(tool))),
            Err(e) => warn!("Dynamic analysis disabled: {e}"),
        }
        if let Some(primary) = &providers.primary {
            strategies.push(Box::new(LlmListStrategy::primary(primary.clone())));
        }
        if let Some(secondary) = &providers.secondary {
            strategies.push(Box::new(LlmListStrategy::secondary(secondary.clone())));
        }
        strategies.push(Box::new(PatternStrategy));
        strategies.push(Box::new(KeywordStrategy));

        Self::with_strategies(strategies)
    }

    pub fn with_strategies(strategies: Vec<Box<dyn SkillStrategy>>) -> Self {
        Self { strategies }
    }

    pub async fn extract_skills(&self, description: &str, title: &str) -> ExtractionOutcome {
        info!(
            "Extracting skills: title='{}', description length={}",
            title,
            description.len()
        );

        let mut skills: Vec<SkillRecord> = Vec::new();
        let mut dynamic_analysis = None;
        let mut method = None;

        for strategy in &self.strategies {
            let stage = strategy.method();
            let output = match strategy.extract(description, title).await {
                Ok(output) => output,
                Err(e) => {
                    warn!("Extraction stage {stage} failed: {e}");
                    continue;
                }
            };

            debug!(
                "Stage {stage} found {:?}",
                output.skills.iter().map(|s| &s.name).collect::<Vec<_>>()
            );

            for skill in output.skills {
                if !skills.iter().any(|s| s.name == skill.name) {
                    skills.push(skill);
                }
            }
            if output.dynamic_analysis.is_some() {
                dynamic_analysis = output.dynamic_analysis;
            }

            if skills.len() >= ENOUGH_SKILLS {
                method = Some(stage);
                break;
            }
        }

        let method = method.unwrap_or(ExtractionMethod::BasicExtraction);
        let skills = deduplicate_and_rank(filter_generic_skills(skills));

        info!(
            "Extracted {} skills via {method}: {:?}",
            skills.len(),
            skills.iter().map(|s| &s.name).collect::<Vec<_>>()
        );

        ExtractionOutcome {
            skills,
            method,
            dynamic_analysis,
        }
    }
}
