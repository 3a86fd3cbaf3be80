use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::warn;

mod error;

pub use error::GenerationError;

use crate::config::{AIProvider, Config};

const SYSTEM_PROMPT: &str = "You are an expert Laravel developer. Generate clean, \
    production-ready code and follow the requested output format exactly.";

const MAX_RETRIES: u32 = 3;
const INITIAL_RETRY_DELAY: u64 = 1000; // milliseconds
const MAX_RETRY_DELAY: u64 = 10000; // 10 seconds max delay

#[derive(Debug)]
struct RetryConfig {
    max_retries: u32,
    initial_delay: u64,
    max_delay: u64,
}

impl RetryConfig {
    fn new() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_delay: INITIAL_RETRY_DELAY,
            max_delay: MAX_RETRY_DELAY,
        }
    }

    /// Only transient classes are worth another attempt; a bad key or a
    /// malformed reply will not improve on retry.
    fn should_retry(&self, error: &GenerationError) -> bool {
        matches!(
            error,
            GenerationError::Network(_) | GenerationError::RateLimit(_)
        )
    }

    fn get_delay(&self, attempt: u32) -> Duration {
        let delay = self.initial_delay * 2u64.pow(attempt);
        Duration::from_millis(delay.min(self.max_delay))
    }
}

async fn with_retries<T, F, Fut>(config: &RetryConfig, f: F) -> Result<T, GenerationError>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, GenerationError>>,
{
    let mut attempt = 0;
    let mut last_error = None;

    while attempt < config.max_retries {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if config.should_retry(&e) {
                    let delay = config.get_delay(attempt);
                    warn!(error = %e, ?delay, "request failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    last_error = Some(e);
                    continue;
                } else {
                    return Err(e);
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| GenerationError::Network("Max retries exceeded".to_string())))
}

/// Send one prompt to the configured provider and return the reply text.
/// Retries transient failures; everything else surfaces as a typed error
/// for the orchestration layer to convert into a diagnostic record.
pub async fn generate_text(prompt: &str, config: &Config) -> Result<String, GenerationError> {
    let retry_config = RetryConfig::new();

    with_retries(&retry_config, || async {
        match config.ai.provider {
            AIProvider::Anthropic => anthropic_generate(prompt, config).await,
            AIProvider::OpenAI => openai_generate(prompt, config).await,
        }
    })
    .await
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

fn check_status(status: StatusCode, body: &str) -> Result<(), GenerationError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => {
            Err(GenerationError::RateLimit("Rate limit exceeded".to_string()))
        }
        StatusCode::UNAUTHORIZED => {
            Err(GenerationError::Authentication("Invalid API key".to_string()))
        }
        status => Err(GenerationError::Api(format!(
            "Unexpected status code: {} - Response: {}",
            status, body
        ))),
    }
}

async fn anthropic_generate(prompt: &str, config: &Config) -> Result<String, GenerationError> {
    let api_key = config
        .ai
        .anthropic_api_key
        .as_ref()
        .ok_or_else(|| GenerationError::Validation("Anthropic API key not configured".to_string()))?;

    let client = reqwest::Client::new();
    let mut headers = HeaderMap::new();
    headers.insert("anthropic-version", HeaderValue::from_static("2023-06-01"));
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(api_key)
            .map_err(|e| GenerationError::Validation(format!("Invalid API key: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let api_url = config
        .ai
        .api_url
        .as_deref()
        .unwrap_or("https://api.anthropic.com/v1/messages");

    let response = client
        .post(api_url)
        .headers(headers)
        .json(&json!({
            "model": &config.ai.model,
            "max_tokens": config.ai.max_tokens,
            "system": SYSTEM_PROMPT,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        }))
        .send()
        .await
        .map_err(|e| GenerationError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GenerationError::Network(format!("Failed to read response body: {}", e)))?;

    check_status(status, &body)?;

    let parsed: AnthropicResponse = serde_json::from_str(&body).map_err(|e| {
        GenerationError::ResponseShape(format!("Failed to parse Anthropic response: {}", e))
    })?;

    let part = parsed.content.first().ok_or(GenerationError::EmptyContent)?;
    if part.text.trim().is_empty() {
        return Err(GenerationError::EmptyContent);
    }

    Ok(part.text.clone())
}

async fn openai_generate(prompt: &str, config: &Config) -> Result<String, GenerationError> {
    let api_key = config
        .ai
        .openai_api_key
        .as_ref()
        .ok_or_else(|| GenerationError::Validation("OpenAI API key not configured".to_string()))?;

    let client = reqwest::Client::new();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| GenerationError::Validation(format!("Invalid API key: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let api_url = config
        .ai
        .api_url
        .as_deref()
        .unwrap_or("https://api.openai.com/v1/chat/completions");

    let response = client
        .post(api_url)
        .headers(headers)
        .json(&json!({
            "model": &config.ai.model,
            "max_tokens": config.ai.max_tokens,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        }))
        .send()
        .await
        .map_err(|e| GenerationError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GenerationError::Network(format!("Failed to read response body: {}", e)))?;

    check_status(status, &body)?;

    let parsed: OpenAIResponse = serde_json::from_str(&body).map_err(|e| {
        GenerationError::ResponseShape(format!("Failed to parse OpenAI response: {}", e))
    })?;

    let choice = parsed.choices.first().ok_or(GenerationError::EmptyContent)?;
    if choice.message.content.trim().is_empty() {
        return Err(GenerationError::EmptyContent);
    }

    Ok(choice.message.content.clone())
}
