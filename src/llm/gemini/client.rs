use log::debug;

use crate::llm::{CallOptions, LLMError};

use super::{
    Content, Credential, Gemini, GeminiConfig, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig,
};

/// Client in the style of the `google-genai` SDK: one client, model chosen
/// per call through [`Client::models`]. The key travels in the
/// `x-goog-api-key` header.
#[derive(Clone)]
pub struct Client {
    gemini: Gemini,
}

impl Client {
    pub fn new(mut config: GeminiConfig) -> Self {
        config.set_credential(Credential::Header);
        Self {
            gemini: Gemini::new(config),
        }
    }

    pub fn models(&self) -> Models<'_> {
        Models { client: self }
    }
}

pub struct Models<'a> {
    client: &'a Client,
}

impl Models<'_> {
    pub async fn generate_content(
        &self,
        model: &str,
        contents: &str,
    ) -> Result<GenerateContentResponse, LLMError> {
        self.generate_content_with_options(model, contents, &CallOptions::default())
            .await
    }

    pub async fn generate_content_with_options(
        &self,
        model: &str,
        contents: &str,
        options: &CallOptions,
    ) -> Result<GenerateContentResponse, LLMError> {
        debug!("generate_content model={} options={:?}", model, options);
        let request = GenerateContentRequest {
            contents: vec![Content::text(Some("user"), contents)],
            system_instruction: None,
            generation_config: if options.is_empty() {
                None
            } else {
                Some(GenerationConfig::from(options))
            },
        };
        self.client
            .gemini
            .generate_content_with_model(model, &request)
            .await
    }
}
