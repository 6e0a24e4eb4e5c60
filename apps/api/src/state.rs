use std::sync::Arc;

use crate::boolean::BooleanGenerator;
use crate::config::Config;
use crate::extraction::SkillExtractor;
use crate::llm_client::LlmProviders;
use crate::skill_context::ContextAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub providers: LlmProviders,
    pub extractor: Arc<SkillExtractor>,
    pub boolean_generator: Arc<BooleanGenerator>,
    pub context_analyzer: Arc<ContextAnalyzer>,
}

impl AppState {
    /// Wires every service to the same provider set.
    pub fn new(config: Config, providers: LlmProviders) -> Self {
        Self {
            extractor: Arc::new(SkillExtractor::new(&providers)),
            boolean_generator: Arc::new(BooleanGenerator::new(&providers)),
            context_analyzer: Arc::new(ContextAnalyzer::new(providers.clone())),
            providers,
            config,
        }
    }
}
