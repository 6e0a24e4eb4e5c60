//! Scripted `TextGenerator` used by unit tests across the crate.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, PromptRequest, Provider, TextGenerator};

/// Replays a fixed queue of answers. Once the queue is drained every call fails with
/// `EmptyContent`. Records the prompts it received.
pub struct ScriptedGenerator {
    provider: Provider,
    answers: Mutex<VecDeque<Result<String, u16>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(provider: Provider, answers: Vec<Result<&str, u16>>) -> Self {
        Self {
            provider,
            answers: Mutex::new(
                answers
                    .into_iter()
                    .map(|a| a.map(str::to_string))
                    .collect(),
            ),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn ok(provider: Provider, text: &str) -> Self {
        Self::new(provider, vec![Ok(text); 16])
    }

    /// Always fails with an API error of the given status.
    pub fn failing(provider: Provider, status: u16) -> Self {
        Self::new(provider, vec![Err(status); 16])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn generate(&self, request: &PromptRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.to_string());
        match self.answers.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => Err(LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}
