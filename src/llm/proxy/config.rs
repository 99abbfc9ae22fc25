use anyhow::Result;

/// Apps Script relay the proxy probe talks to unless `PROXY_URL` says otherwise.
pub const DEFAULT_PROXY_URL: &str = "https://script.google.com/macros/s/AKfycbxGwsPowTrYLsz_bQN81JesVjRjFcE6T8gwmJMd-jLA7N1ovCBRDz6udBgAMdOADryfaw/exec";

pub const DEFAULT_PROXY_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug, PartialEq)]
pub struct ProxyConfig {
    url: String,
    model: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROXY_URL.to_string(),
            model: DEFAULT_PROXY_MODEL.to_string(),
        }
    }
}

impl ProxyConfig {
    pub fn url(&self) -> &str {
        &self.url
    }
    pub fn model(&self) -> &str {
        &self.model
    }
}

pub struct ProxyConfigBuilder {
    config: ProxyConfig,
}

impl Default for ProxyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ProxyConfig::default(),
        }
    }
    pub fn with_url(mut self, url: &str) -> Self {
        self.config.url = url.into();
        self
    }
    pub fn with_model(mut self, model: &str) -> Self {
        self.config.model = model.into();
        self
    }
    pub fn build(self) -> Result<ProxyConfig> {
        if self.config.url.is_empty() {
            anyhow::bail!("Proxy URL must be set");
        }
        if self.config.model.is_empty() {
            anyhow::bail!("Model must be set");
        }

        Ok(self.config)
    }
}
