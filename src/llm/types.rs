use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent,
};
use thiserror::Error;

/// Failure raised while talking to the completion API.
///
/// The `Display` text is the bare upstream message, so callers can wrap it in
/// their own prefix without doubling up.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error(transparent)]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("{0}")]
    Api(String),

    #[error("completion response contained no choices")]
    NoChoices,
}

impl LlmError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Only user messages are ever sent upstream.
    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage, LlmError> {
        match self.role.as_str() {
            "user" => {
                let msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()?;
                Ok(msg.into())
            }
            _ => Err(LlmError::api(format!(
                "Unknown message role: {}",
                self.role
            ))),
        }
    }
}

impl ChatCompletionResponse {
    /// Content of the first choice, the only one this service ever reads.
    pub fn first_content(&self) -> Result<&str, LlmError> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or(LlmError::NoChoices)
    }
}
