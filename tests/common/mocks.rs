use async_trait::async_trait;
use swaad_ai::llm::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient, LlmError,
};
use std::sync::{Arc, Mutex};

/// Mock completion API for testing. Records every request it receives.
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            content: None,
            error: None,
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(LlmError::api(error.clone()));
        }

        match self.content {
            Some(ref content) => Ok(create_mock_chat_response(content)),
            None => Err(LlmError::api("No mock response configured")),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("Stop".to_string()),
        }],
    }
}
