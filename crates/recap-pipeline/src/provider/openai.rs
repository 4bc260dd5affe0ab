//! Blocking client for OpenAI-compatible `/chat/completions` endpoints.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use recap_core::config::ProviderConfig;
use recap_core::errors::{ConfigError, ProviderError};
use recap_core::models::{ChatMessage, ChatRequest, Completion};
use recap_core::traits::ICompletionProvider;

/// One attempt per call: retries belong to the caller's `RetryPolicy`.
#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiCompatProvider {
    pub fn new(api_key: impl Into<String>, base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "provider.api_key".to_string(),
                message: "API key is empty".to_string(),
            });
        }
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "provider".to_string(),
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.trim().to_string(),
        })
    }

    /// Read the API key from the environment variable named in `config`.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| ConfigError::ValidationFailed {
            field: "provider.api_key_env".to_string(),
            message: format!("environment variable {} is not set", config.api_key_env),
        })?;
        Self::new(api_key, &config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout {
            reason: err.to_string(),
        }
    } else {
        ProviderError::Connection {
            reason: err.to_string(),
        }
    }
}

/// Extract the first choice's text from a response body.
pub(crate) fn parse_response(body: &str) -> Result<Completion, ProviderError> {
    let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
        reason: format!("malformed completion body: {e}"),
    })?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(Completion::new)
        .ok_or_else(|| ProviderError::InvalidResponse {
            reason: "response has no message content".to_string(),
        })
}

impl ICompletionProvider for OpenAiCompatProvider {
    fn complete(
        &self,
        model: &str,
        request: &ChatRequest,
        temperature: f64,
    ) -> Result<Completion, ProviderError> {
        let body = CompletionBody {
            model,
            messages: &request.messages,
            temperature,
        };
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().map_err(transport_error)?;
        debug!(status = status.as_u16(), bytes = text.len(), "completion response");

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_response(&text)
    }

    fn name(&self) -> &str {
        "openai-compat"
    }
}
