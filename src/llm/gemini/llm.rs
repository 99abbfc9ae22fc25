use async_trait::async_trait;
use log::debug;

use reqwest::header::CONTENT_TYPE;

use crate::llm::{CallOptions, GenerateResult, LLM, LLMError, MessageType, Messages};

use super::{
    Content, Credential, GeminiConfig, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, schema::ErrorResponse,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Native `generateContent` client shared by both SDK styles.
#[derive(Clone)]
pub struct Gemini {
    config: GeminiConfig,
    options: CallOptions,
    client: reqwest::Client,
}

impl Gemini {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            options: CallOptions::default(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = self.options.merge(&options);
        self
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Sends `request` to the configured model.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError> {
        let model = self.config.model().to_string();
        self.generate_content_with_model(&model, request).await
    }

    pub(crate) async fn generate_content_with_model(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError> {
        let url = format!("{}/models/{}:generateContent", self.config.api_base(), model);
        debug!("Gemini Request Url: {:?}", url);
        debug!("Gemini Request json: {:?}", serde_json::to_string(request)?);

        let builder = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?);
        let builder = match self.config.credential() {
            Credential::Header => builder.header(API_KEY_HEADER, self.config.api_key()),
            Credential::QueryParam => builder.query(&[("key", self.config.api_key())]),
        };

        let response = builder.send().await?;
        let status = response.status();
        debug!("Gemini Response Status: {}", status);
        let body = response.text().await?;
        debug!("Gemini Response Body: {:?}", body);

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(error) => Err(error.error.into()),
                Err(_) => Err(LLMError::HttpStatus {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                    body,
                }),
            }
        }
    }

    pub(crate) fn build_request(&self, messages: &Messages) -> GenerateContentRequest {
        let contents = messages
            .as_ref()
            .iter()
            .filter_map(|message| {
                let role = match message.message_type {
                    MessageType::HumanMessage => "user",
                    MessageType::AIMessage => "model",
                    MessageType::SystemMessage => return None,
                };
                Some(Content::text(Some(role), &message.content))
            })
            .collect();

        GenerateContentRequest {
            contents,
            system_instruction: messages
                .system_prompt()
                .map(|prompt| Content::text(None, &prompt)),
            generation_config: if self.options.is_empty() {
                None
            } else {
                Some(GenerationConfig::from(&self.options))
            },
        }
    }
}

#[async_trait]
impl LLM for Gemini {
    async fn generate(&self, messages: &Messages) -> Result<GenerateResult, LLMError> {
        let request = self.build_request(messages);
        let response = self.generate_content(&request).await?;
        Ok(GenerateResult::new(response.text()?, response.token_usage()))
    }
}
