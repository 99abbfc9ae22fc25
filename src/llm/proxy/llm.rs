use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use reqwest::header::CONTENT_TYPE;

use crate::llm::{GenerateResult, LLM, LLMError, MessageType, Messages};

use super::ProxyConfig;

/// Apps Script `doPost` relays accept the JSON payload as plain text.
pub const PROXY_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Chat-completion relay. The response body is returned verbatim.
#[derive(Clone)]
pub struct Proxy {
    config: ProxyConfig,
    client: reqwest::Client,
}

impl Proxy {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    fn build_request(&self, messages: &Messages) -> ChatRequest {
        let messages = messages
            .as_ref()
            .iter()
            .map(|message| {
                let role = match message.message_type {
                    MessageType::SystemMessage => "system",
                    MessageType::HumanMessage => "user",
                    MessageType::AIMessage => "assistant",
                };
                ChatMessage {
                    role: role.to_string(),
                    content: message.content.clone(),
                }
            })
            .collect();
        ChatRequest {
            model: self.config.model().to_string(),
            messages,
        }
    }
}

#[async_trait]
impl LLM for Proxy {
    async fn generate(&self, messages: &Messages) -> Result<GenerateResult, LLMError> {
        let request = self.build_request(messages);
        let body = serde_json::to_string(&request)?;
        debug!("Proxy Request Url: {:?}", self.config.url());
        debug!("Proxy Request json: {:?}", body);

        let response = self
            .client
            .post(self.config.url())
            .header(CONTENT_TYPE, PROXY_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Proxy Response Status: {}", status);
        let text = response.text().await?;
        debug!("Proxy Response Body: {:?}", text);

        if status.is_success() {
            Ok(GenerateResult::new(text, None))
        } else {
            Err(LLMError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: text,
            })
        }
    }
}
