//! One-shot connectivity probes.
//!
//! Each probe makes at most one request and reports the outcome on the given
//! writer. Failures of the request are printed, never returned: the only
//! error a probe propagates is a failed write.

use std::io::{self, Write};

use log::{debug, info};

use crate::llm::{
    LLM,
    gemini::{Client, GeminiConfig, GeminiConfigBuilder, GeminiModel, GenerativeModel},
    proxy::{Proxy, ProxyConfigBuilder},
};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
pub const PROXY_URL_VAR: &str = "PROXY_URL";

pub const GEMINI_MODEL: GeminiModel = GeminiModel::Gemini15;
pub const GENERATIVEAI_PROMPT: &str = "Hello, are you working?";
pub const GENAI_PROMPT: &str = "Hello, this is a test from the new SDK.";
pub const PROXY_PROMPT: &str = "Hello";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings the probes read from the process environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeEnv {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub proxy_url: Option<String>,
}

impl ProbeEnv {
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: var(API_KEY_VAR),
            api_base: var(API_BASE_VAR),
            proxy_url: var(PROXY_URL_VAR),
        }
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = Some(api_base.to_string());
        self
    }

    pub fn with_proxy_url(mut self, proxy_url: &str) -> Self {
        self.proxy_url = Some(proxy_url.to_string());
        self
    }

    fn gemini_config(&self, api_key: &str) -> anyhow::Result<GeminiConfig> {
        let mut builder = GeminiConfigBuilder::new()
            .with_api_key(api_key)
            .with_model(GEMINI_MODEL);
        if let Some(api_base) = &self.api_base {
            builder = builder.with_api_base(api_base);
        }
        builder.build()
    }
}

fn var(name: &str) -> Option<String> {
    dotenvy::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Loads `.env` into the process environment if one is present.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(err) => debug!("No .env loaded: {}", err),
    }
}

fn warn_missing_key<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Warning: {} environment variable not set.", API_KEY_VAR)?;
    writeln!(out, "Please set your API key to run the model test.")
}

/// Legacy SDK style: configure the key, build a `GenerativeModel`, ask once.
pub async fn generativeai<W: Write>(out: &mut W, env: &ProbeEnv) -> io::Result<()> {
    writeln!(out, "Installed llm_probe version: {}", VERSION)?;

    let Some(api_key) = env.api_key.as_deref() else {
        return warn_missing_key(out);
    };
    let config = match env.gemini_config(api_key) {
        Ok(config) => config,
        Err(err) => return writeln!(out, "An error occurred: {}", err),
    };
    let model = GenerativeModel::new(config);

    writeln!(out, "Sending request to Gemini 1.5 Flash...")?;
    ask(out, &model, GENERATIVEAI_PROMPT).await
}

/// New SDK style: build a `Client`, pick the model per call, ask once.
pub async fn genai<W: Write>(out: &mut W, env: &ProbeEnv) -> io::Result<()> {
    writeln!(out, "llm_probe genai client {} installed.", VERSION)?;

    let Some(api_key) = env.api_key.as_deref() else {
        return warn_missing_key(out);
    };
    let config = match env.gemini_config(api_key) {
        Ok(config) => config,
        Err(err) => return writeln!(out, "An error occurred: {}", err),
    };
    let client = Client::new(config);

    writeln!(
        out,
        "Sending request to Gemini 1.5 Flash using google-genai client..."
    )?;
    let result = client
        .models()
        .generate_content(&GEMINI_MODEL.to_string(), GENAI_PROMPT)
        .await
        .and_then(|response| response.text());
    match result {
        Ok(text) => {
            writeln!(out, "Response received:")?;
            writeln!(out, "{}", text)
        }
        Err(err) => writeln!(out, "An error occurred: {}", err),
    }
}

/// Raw relay call: POST the chat payload, print the body as-is.
pub async fn proxy<W: Write>(out: &mut W, env: &ProbeEnv) -> io::Result<()> {
    let mut builder = ProxyConfigBuilder::new();
    if let Some(url) = &env.proxy_url {
        builder = builder.with_url(url);
    }
    let config = match builder.build() {
        Ok(config) => config,
        Err(err) => return writeln!(out, "Error: {}", err),
    };
    info!("Posting to proxy with model {}", config.model());

    relay(out, &Proxy::new(config), PROXY_PROMPT).await
}

/// Sends `prompt` and prints the generated text.
pub async fn ask<W, L>(out: &mut W, llm: &L, prompt: &str) -> io::Result<()>
where
    W: Write,
    L: LLM + ?Sized,
{
    match llm.invoke(prompt).await {
        Ok(result) => {
            if let Some(tokens) = result.tokens() {
                debug!("Token usage: {:?}", tokens);
            }
            writeln!(out, "Response received:")?;
            writeln!(out, "{}", result.generation())
        }
        Err(err) => writeln!(out, "An error occurred: {}", err),
    }
}

/// Sends `prompt` and prints the raw reply, plus the error body on failure.
pub async fn relay<W, L>(out: &mut W, llm: &L, prompt: &str) -> io::Result<()>
where
    W: Write,
    L: LLM + ?Sized,
{
    match llm.invoke(prompt).await {
        Ok(result) => {
            writeln!(out, "Success:")?;
            writeln!(out, "{}", result.generation())
        }
        Err(err) => {
            writeln!(out, "Error: {}", err)?;
            if let Some(body) = err.response_body() {
                writeln!(out, "{}", body)?;
            }
            Ok(())
        }
    }
}
