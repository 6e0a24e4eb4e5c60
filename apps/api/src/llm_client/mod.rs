/// LLM Client: the single point of entry for every text-generation call in Firki.
///
/// ARCHITECTURAL RULE: No other module may talk to Gemini or OpenAI directly.
/// Services depend on the `TextGenerator` capability and receive concrete clients
/// through `LlmProviders`, so each cascade stage can be exercised with a scripted fake.
///
/// A failed call is never retried against the same provider. The caller decides
/// whether to route the request to the next provider or strategy.
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::info;

use crate::config::Config;

pub mod gemini;
pub mod openai;
pub mod payload;
pub mod prompts;

#[cfg(test)]
pub mod testing;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("{0} API key is not configured")]
    MissingApiKey(Provider),
}

/// Upstream text-generation services. Gemini is the primary provider, OpenAI the secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Gemini => write!(f, "Gemini"),
            Provider::OpenAi => write!(f, "OpenAI"),
        }
    }
}

/// A single prompt sent to a provider. `system` is folded into the request the way each
/// provider expects it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptRequest<'a> {
    pub system: Option<&'a str>,
    pub prompt: &'a str,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl<'a> PromptRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            ..Default::default()
        }
    }

    pub fn with_system(mut self, system: &'a str) -> Self {
        self.system = Some(system);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Capability implemented by every provider client.
/// Returns the raw text of the first candidate; callers treat it as untrusted.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn provider(&self) -> Provider;

    async fn generate(&self, request: &PromptRequest<'_>) -> Result<String, LlmError>;
}

/// The configured providers, in fallback order. A provider without an API key is absent.
#[derive(Clone, Default)]
pub struct LlmProviders {
    pub primary: Option<Arc<dyn TextGenerator>>,
    pub secondary: Option<Arc<dyn TextGenerator>>,
}

impl LlmProviders {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()?;

        let primary = config.gemini_api_key.clone().map(|key| {
            Arc::new(GeminiClient::new(client.clone(), key, config.gemini_model.clone()))
                as Arc<dyn TextGenerator>
        });
        let secondary = config.openai_api_key.clone().map(|key| {
            Arc::new(OpenAiClient::new(client.clone(), key, config.openai_model.clone()))
                as Arc<dyn TextGenerator>
        });

        info!(
            "LLM providers: primary={}, secondary={}",
            describe(&primary),
            describe(&secondary)
        );

        Ok(Self { primary, secondary })
    }

    /// Configured providers in fallback order.
    pub fn ordered(&self) -> Vec<Arc<dyn TextGenerator>> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

fn describe(provider: &Option<Arc<dyn TextGenerator>>) -> String {
    provider
        .as_ref()
        .map(|p| p.provider().to_string())
        .unwrap_or_else(|| "disabled".to_string())
}

/// Reads an error body from a provider, preferring the structured `error.message` field.
pub(crate) fn api_error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or(body)
}
