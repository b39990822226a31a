use crate::llm::{ChatCompletionRequest, ChatMessage, LlmClient};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a recipe could not be produced.
///
/// The `Display` strings are exactly what the HTTP layer writes back to the
/// browser in place of a recipe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Error: No ingredients provided.")]
    EmptyInput,

    #[error("Error in OpenAI API call: {0}")]
    Upstream(String),
}

/// Fills the recipe prompt template. The input is embedded as typed.
pub fn build_prompt(components: &str) -> String {
    format!(
        "Suggest a recipe using {components}. Include step-by-step instructions, ingredient quantities, and a recipe name."
    )
}

pub struct Generator {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl Generator {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
        }
    }

    /// Asks the completion API for a recipe built from `components`.
    ///
    /// Empty input short-circuits without any network call. Every upstream
    /// failure, including a response without choices, becomes
    /// [`GenerationError::Upstream`]. No retries.
    pub async fn generate(&self, components: &str) -> Result<String, GenerationError> {
        if components.is_empty() {
            debug!("Rejecting empty ingredient list");
            return Err(GenerationError::EmptyInput);
        }

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(build_prompt(components))],
        };

        info!("Requesting recipe from {} for: {}", self.model, components);

        self.llm_client
            .create_chat_completion(request)
            .await
            .and_then(|response| response.first_content().map(str::to_owned))
            .map_err(|e| {
                warn!("Completion request failed: {}", e);
                GenerationError::Upstream(e.to_string())
            })
    }

    /// Same as [`Generator::generate`], with failures rendered as their
    /// user-facing message.
    pub async fn generate_text(&self, components: &str) -> String {
        self.generate(components)
            .await
            .unwrap_or_else(|e| e.to_string())
    }
}
