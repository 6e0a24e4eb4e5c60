//! Context Analyzer: interview context and probing questions for extracted skills.
//!
//! Curated entries answer most requests without a provider call. Unknown skills go to the
//! providers in fallback order; a provider that answers with unusable JSON ends the search
//! and the static context is used.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::extraction::models::SkillRecord;
use crate::llm_client::payload::parse_structured;
use crate::llm_client::{LlmProviders, PromptRequest};
use crate::skill_context::prompts::{market_insights_prompt, skill_context_prompt};
use crate::skill_context::table::lookup;

const CONTEXT_MAX_TOKENS: u32 = 300;
const CONTEXT_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillContext {
    pub description: String,
    pub probing_question: String,
    pub key_areas: Vec<String>,
}

impl SkillContext {
    /// Generic context used when nothing better is available.
    pub fn fallback(skill: &str) -> Self {
        Self {
            description: format!("Technical skill: {skill}"),
            probing_question: format!(
                "Can you tell me about your experience with {skill}? \
                 What was the most challenging project you worked on?"
            ),
            key_areas: vec![skill.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillContextEntry {
    pub skill: String,
    pub context: SkillContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCombination {
    pub skills: Vec<String>,
    pub description: String,
    pub market_demand: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub market_trends: Vec<String>,
    pub recommendations: Vec<String>,
}

impl MarketInsights {
    fn fallback(lead_skill: &str) -> Self {
        Self {
            market_trends: vec![
                format!("High demand for {lead_skill} professionals"),
                "Growing market for technical skills combination".to_string(),
            ],
            recommendations: vec![
                "Focus on practical project experience".to_string(),
                "Stay updated with latest industry trends".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillInsights {
    pub skill_combinations: Vec<SkillCombination>,
    pub market_trends: Vec<String>,
    pub recommendations: Vec<String>,
}

pub struct ContextAnalyzer {
    providers: LlmProviders,
}

impl ContextAnalyzer {
    pub fn new(providers: LlmProviders) -> Self {
        Self { providers }
    }

    /// One entry per input skill, in input order.
    pub async fn get_skill_context(&self, skills: &[SkillRecord]) -> Vec<SkillContextEntry> {
        let mut entries = Vec::with_capacity(skills.len());
        for skill in skills {
            let context = match lookup(&skill.name) {
                Some(curated) => curated.to_context(),
                None => self.generate_context(&skill.name).await,
            };
            entries.push(SkillContextEntry {
                skill: skill.name.clone(),
                context,
            });
        }
        entries
    }

    async fn generate_context(&self, skill: &str) -> SkillContext {
        let prompt = skill_context_prompt(skill);
        let request = PromptRequest::new(&prompt)
            .with_max_tokens(CONTEXT_MAX_TOKENS)
            .with_temperature(CONTEXT_TEMPERATURE);

        for generator in self.providers.ordered() {
            let provider = generator.provider();
            match generator.generate(&request).await {
                Ok(text) => {
                    return parse_structured(&text).unwrap_or_else(|e| {
                        warn!("{provider} returned unusable context for {skill}: {e}");
                        SkillContext::fallback(skill)
                    });
                }
                Err(e) => warn!("{provider} context generation failed for {skill}: {e}"),
            }
        }

        debug!("Using static context for {skill}");
        SkillContext::fallback(skill)
    }

    /// Pairs the two leading skills and asks the primary provider for market trends.
    pub async fn get_skill_insights(&self, skills: &[SkillRecord]) -> SkillInsights {
        let names: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();

        let skill_combinations = match names.as_slice() {
            [first, second, ..] => vec![SkillCombination {
                skills: vec![first.clone(), second.clone()],
                description: format!("Strong combination of {first} and {second}"),
                market_demand: "High".to_string(),
            }],
            _ => Vec::new(),
        };

        let market = match names.first() {
            Some(lead) => self
                .market_insights(&names)
                .await
                .unwrap_or_else(|| MarketInsights::fallback(lead)),
            None => MarketInsights {
                market_trends: Vec::new(),
                recommendations: Vec::new(),
            },
        };

        SkillInsights {
            skill_combinations,
            market_trends: market.market_trends,
            recommendations: market.recommendations,
        }
    }

    async fn market_insights(&self, names: &[String]) -> Option<MarketInsights> {
        let generator = self.providers.primary.as_ref()?;
        let prompt = market_insights_prompt(names);

        let text = generator
            .generate(&PromptRequest::new(&prompt))
            .await
            .map_err(|e| warn!("Market insight generation failed: {e}"))
            .ok()?;

        parse_structured(&text)
            .map_err(|e| warn!("Market insights were not valid JSON: {e}"))
            .ok()
    }
}
