use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::Translator;

/// Translator backed by the `/api/generate` endpoint of an Ollama server
#[derive(Debug, Clone)]
pub struct OllamaTranslator {
    /// Base URL of the Ollama API
    base_url: String,
    /// Model used for generation
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    model: String,
    prompt: String,
    system: String,
    stream: bool,
    options: GenerationOptions,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationOptions {
    temperature: f32,
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// Model name
    #[serde(default)]
    pub model: String,
    /// Generated text
    pub response: String,
    /// Whether the generation is complete
    #[serde(default)]
    pub done: bool,
}

impl OllamaTranslator {
    /// Create a translator for the server at `base_url`, e.g. `http://localhost:11434`
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new_with_config(base_url, model, 0.1, 2, 500)
    }

    /// Create a translator with explicit sampling and retry settings
    pub fn new_with_config(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            model: model.into(),
            temperature,
            client: Client::builder()
                // Ollama uses HTTP/1.1
                .http1_only()
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the system prompt for a language pair
    pub fn system_prompt(source_language: &str, target_language: &str) -> String {
        let source = language_utils::get_language_name(source_language)
            .unwrap_or_else(|_| source_language.to_string());
        let target = language_utils::get_language_name(target_language)
            .unwrap_or_else(|_| target_language.to_string());
        format!(
            "You are a professional translator. Translate the following text from {} to {}. \
             Keep sentence boundaries and punctuation. \
             Only respond with the translated text, without any explanations or notes.",
            source, target
        )
    }

    fn build_request(&self, text: &str, source_language: &str, target_language: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            prompt: text.to_string(),
            system: Self::system_prompt(source_language, target_language),
            stream: false,
            options: GenerationOptions {
                temperature: self.temperature,
            },
        }
    }

    /// Send a generation request, retrying transport and server errors
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);
        let mut attempt = 0;

        loop {
            let result = self.send_once(&url, request).await;
            match result {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.max_retries && Self::is_retryable(&e) => {
                    let backoff = self.backoff_delay(attempt);
                    warn!(
                        "Ollama request failed (attempt {}/{}): {}. Retrying in {:?}",
                        attempt + 1,
                        self.max_retries + 1,
                        e,
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Delay before retry number `attempt + 1`, doubling from the base and saturating
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.backoff_base_ms.saturating_mul(factor))
    }

    async fn send_once(&self, url: &str, request: &GenerationRequest) -> Result<GenerationResponse, ProviderError> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    fn is_retryable(error: &ProviderError) -> bool {
        match error {
            ProviderError::ConnectionError(_) | ProviderError::RequestFailed(_) => true,
            ProviderError::ApiError { status_code, .. } => *status_code >= 500 || *status_code == 429,
            _ => false,
        }
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let request = self.build_request(text, source_language, target_language);
        let response = self.generate(&request).await?;
        debug!("Ollama model {} answered (done: {})", response.model, response.done);

        let translated = response.response.trim();
        if translated.is_empty() {
            return Err(ProviderError::ParseError("empty translation".to_string()));
        }
        Ok(translated.to_string())
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
