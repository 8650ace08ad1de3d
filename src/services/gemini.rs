use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::provider::ProviderConfig;
use crate::modules::validation::null_as_default;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Gemini API error: {status} {body}")]
    Upstream { status: u16, body: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single-turn prompt for a text-only model.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
            }],
            generation_config: None,
        }
    }

    /// Single-turn prompt asking for both a description and an image.
    pub fn text_and_image(prompt: impl Into<String>) -> Self {
        Self {
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            }),
            ..Self::text(prompt)
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// Candidates are kept as raw JSON so they can be handed back to the browser
/// untouched, whatever fields the provider adds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Value>,
}

impl GenerateContentResponse {
    pub fn first_candidate(&self) -> Option<&Value> {
        self.candidates.first()
    }
}

/// Text of the first part under `content.parts` that carries a string `text`.
pub fn first_text_part(candidate: &Value) -> Option<&str> {
    candidate
        .pointer("/content/parts")?
        .as_array()?
        .iter()
        .find_map(|part| part.get("text").and_then(Value::as_str))
}

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError>;
}

/// Gemini reached through the Pica passthrough. Authentication travels in the
/// `x-pica-*` headers only.
#[derive(Clone)]
pub struct PicaGeminiClient {
    client: Client,
    config: ProviderConfig,
}

impl PicaGeminiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }
}

#[async_trait]
impl GenerationProvider for PicaGeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        tracing::debug!(model, "Sending generateContent request through Pica");

        let response = self
            .client
            .post(self.endpoint(model))
            .header("Content-Type", "application/json")
            .header("x-pica-secret", &self.config.secret_key)
            .header("x-pica-connection-key", &self.config.connection_key)
            .header("x-pica-action-id", &self.config.action_id)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, "Gemini API returned an error");
            return Err(ProviderError::Upstream { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            ProviderError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })
    }
}
