use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{CompletionModel, LlmError};

/// Replays canned responses in order and records every prompt it receives.
/// Runs out into `LlmError::EmptyContent`.
pub(crate) struct StubModel {
    responses: Mutex<VecDeque<Result<Value, LlmError>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub(crate) fn new(responses: Vec<Result<Value, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionModel for StubModel {
    async fn call_json(&self, prompt: &str, _system: &str) -> Result<Value, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}
