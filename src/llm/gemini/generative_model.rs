use async_trait::async_trait;

use crate::llm::{CallOptions, GenerateResult, LLM, LLMError, Messages};

use super::{Credential, Gemini, GeminiConfig, GenerateContentResponse};

/// Model handle in the style of the original `google-generativeai` SDK:
/// the key is configured once and the model is fixed at construction.
/// Requests carry the key as a `?key=` query parameter.
#[derive(Clone)]
pub struct GenerativeModel {
    gemini: Gemini,
}

impl GenerativeModel {
    pub fn new(mut config: GeminiConfig) -> Self {
        config.set_credential(Credential::QueryParam);
        Self {
            gemini: Gemini::new(config),
        }
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.gemini = self.gemini.with_options(options);
        self
    }

    pub fn model_name(&self) -> String {
        self.gemini.config().model().to_string()
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse, LLMError> {
        let messages = Messages::builder().add_human_message(prompt).build();
        let request = self.gemini.build_request(&messages);
        self.gemini.generate_content(&request).await
    }
}

#[async_trait]
impl LLM for GenerativeModel {
    async fn generate(&self, messages: &Messages) -> Result<GenerateResult, LLMError> {
        self.gemini.generate(messages).await
    }
}
