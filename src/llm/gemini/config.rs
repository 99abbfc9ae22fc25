use std::fmt;

use anyhow::Result;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug, PartialEq)]
pub enum GeminiModel {
    Gemini15,
    Gemini20,
    Custom(String),
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiModel::Gemini15 => f.write_str("gemini-1.5-flash"),
            GeminiModel::Gemini20 => f.write_str("gemini-2.0-flash-001"),
            GeminiModel::Custom(name) => f.write_str(name),
        }
    }
}

impl From<&str> for GeminiModel {
    fn from(name: &str) -> Self {
        match name {
            "gemini-1.5-flash" => GeminiModel::Gemini15,
            "gemini-2.0-flash-001" => GeminiModel::Gemini20,
            other => GeminiModel::Custom(other.to_string()),
        }
    }
}

impl From<GeminiModel> for String {
    fn from(model: GeminiModel) -> Self {
        model.to_string()
    }
}

/// Where the API key travels on each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Credential {
    /// `x-goog-api-key` header.
    #[default]
    Header,
    /// `?key=` query parameter.
    QueryParam,
}

#[derive(Clone)]
pub struct GeminiConfig {
    api_base: String,
    api_key: String,
    model: GeminiModel,
    credential: Credential,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("credential", &self.credential)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: "".to_string(),
            model: GeminiModel::Gemini15,
            credential: Credential::default(),
        }
    }
}

impl GeminiConfig {
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    pub fn model(&self) -> &GeminiModel {
        &self.model
    }
    pub fn credential(&self) -> Credential {
        self.credential
    }

    pub(crate) fn set_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }
}

pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl Default for GeminiConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GeminiConfig::default(),
        }
    }
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.config.api_base = api_base.trim_end_matches('/').into();
        self
    }
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.config.api_key = api_key.into();
        self
    }
    pub fn with_model(mut self, model: GeminiModel) -> Self {
        self.config.model = model;
        self
    }
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.config.credential = credential;
        self
    }
    pub fn build(self) -> Result<GeminiConfig> {
        if self.config.api_key.is_empty() {
            anyhow::bail!("API key must be set");
        }
        if self.config.api_base.is_empty() {
            anyhow::bail!("API base must be set");
        }

        Ok(self.config)
    }
}
