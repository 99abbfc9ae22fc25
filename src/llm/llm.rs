use async_trait::async_trait;
use log::debug;

use serde::{Deserialize, Serialize};

use super::{LLMError, Messages};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LLM: Send + Sync {
    async fn generate(&self, messages: &Messages) -> Result<GenerateResult, LLMError>;

    /// Sends `prompt` as a single human message.
    async fn invoke(&self, prompt: &str) -> Result<GenerateResult, LLMError> {
        let messages = Messages::builder().add_human_message(prompt).build();
        self.generate(&messages).await
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallOptions {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Values set on `other` win.
    pub fn merge(&self, other: &CallOptions) -> CallOptions {
        debug!("Merging options: {:?} and {:?}", self, other);
        CallOptions {
            temperature: other.temperature.or(self.temperature),
            top_p: other.top_p.or(self.top_p),
            max_output_tokens: other.max_output_tokens.or(self.max_output_tokens),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.max_output_tokens.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GenerateResult {
    tokens: Option<TokenUsage>,
    generation: String,
}

impl GenerateResult {
    pub fn new(generation: String, tokens: Option<TokenUsage>) -> Self {
        Self { generation, tokens }
    }

    pub fn generation(&self) -> &str {
        &self.generation
    }

    pub fn tokens(&self) -> Option<&TokenUsage> {
        self.tokens.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let base = CallOptions::new().with_temperature(0.7).with_top_p(0.95);
        let other = CallOptions::new()
            .with_temperature(0.1)
            .with_max_output_tokens(64);
        let merged = base.merge(&other);
        assert_eq!(merged.temperature, Some(0.1));
        assert_eq!(merged.top_p, Some(0.95));
        assert_eq!(merged.max_output_tokens, Some(64));
    }

    #[test]
    fn test_default_options_are_empty() {
        assert!(CallOptions::default().is_empty());
        assert!(!CallOptions::new().with_top_p(0.5).is_empty());
    }
}
