//! Boolean Generator: turns a ranked skill list into a recruiter search string.
//!
//! A precomputed string carried on the skill records wins outright. Otherwise the
//! strategies run in order (primary provider, secondary provider, rule-based grouping)
//! and the fixed-arity templates render whatever is left.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::boolean::prompts::{boolean_prompt, BOOLEAN_SYSTEM};
use crate::boolean::templates::{fixed_arity_boolean, grouped_boolean, title_pattern, MAX_BOOLEAN_TERMS};
use crate::extraction::models::SkillRecord;
use crate::extraction::strategies::StrategyError;
use crate::llm_client::payload::strip_fences;
use crate::llm_client::{LlmProviders, PromptRequest, TextGenerator};

const BOOLEAN_MAX_TOKENS: u32 = 100;
const BOOLEAN_TEMPERATURE: f32 = 0.3;

#[async_trait]
pub trait BooleanStrategy: Send + Sync {
    fn name(&self) -> String;

    /// `skills` holds at most five names, highest confidence first.
    async fn generate(&self, skills: &[String], title: &str) -> Result<String, StrategyError>;
}

pub struct LlmBooleanStrategy {
    generator: Arc<dyn TextGenerator>,
}

impl LlmBooleanStrategy {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl BooleanStrategy for LlmBooleanStrategy {
    fn name(&self) -> String {
        self.generator.provider().to_string()
    }

    async fn generate(&self, skills: &[String], title: &str) -> Result<String, StrategyError> {
        let prompt = boolean_prompt(skills, title);
        let request = PromptRequest::new(&prompt)
            .with_system(BOOLEAN_SYSTEM)
            .with_max_tokens(BOOLEAN_MAX_TOKENS)
            .with_temperature(BOOLEAN_TEMPERATURE);

        let text = self.generator.generate(&request).await?;
        let query = strip_fences(&text);
        if query.is_empty() {
            return Err(StrategyError::Unusable("boolean prompt"));
        }
        Ok(query.to_string())
    }
}

/// Known titles first, then two anchors ANDed with an OR-group. Declines below four names.
pub struct RuleBasedStrategy;

#[async_trait]
impl BooleanStrategy for RuleBasedStrategy {
    fn name(&self) -> String {
        "rules".to_string()
    }

    async fn generate(&self, skills: &[String], title: &str) -> Result<String, StrategyError> {
        if let Some(canned) = title_pattern(title) {
            return Ok(canned.to_string());
        }
        grouped_boolean(skills).ok_or(StrategyError::Unusable("rule-based grouping"))
    }
}

pub struct BooleanGenerator {
    strategies: Vec<Box<dyn BooleanStrategy>>,
}

impl BooleanGenerator {
    pub fn new(providers: &LlmProviders) -> Self {
        let mut strategies: Vec<Box<dyn BooleanStrategy>> = providers
            .ordered()
            .into_iter()
            .map(|g| Box::new(LlmBooleanStrategy::new(g)) as Box<dyn BooleanStrategy>)
            .collect();
        strategies.push(Box::new(RuleBasedStrategy));
        Self::with_strategies(strategies)
    }

    pub fn with_strategies(strategies: Vec<Box<dyn BooleanStrategy>>) -> Self {
        Self { strategies }
    }

    pub async fn generate_boolean_search(&self, skills: &[SkillRecord], title: &str) -> String {
        if skills.is_empty() {
            return String::new();
        }

        if let Some(precomputed) = skills.iter().find_map(|s| s.ai_boolean_string.as_ref()) {
            debug!("Using precomputed boolean string");
            return precomputed.clone();
        }

        let names: Vec<String> = skills
            .iter()
            .take(MAX_BOOLEAN_TERMS)
            .map(|s| s.name.clone())
            .collect();

        for strategy in &self.strategies {
            match strategy.generate(&names, title).await {
                Ok(query) => {
                    info!("Boolean search generated by {}", strategy.name());
                    return query;
                }
                Err(e) => warn!("Boolean strategy {} failed: {e}", strategy.name()),
            }
        }

        fixed_arity_boolean(&names)
    }
}
