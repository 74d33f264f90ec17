//! OpenAI Images API client (DALL-E).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RequestConfig;
use crate::error::{DalleError, Result};
use crate::service::{GeneratedImage, ImageService};

const GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

/// Client for the OpenAI image generations endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    /// Creates a client that authenticates with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageService for OpenAiClient {
    async fn generate(&self, config: &RequestConfig) -> Result<Vec<GeneratedImage>> {
        let body = ImagesRequest::from_config(config);

        tracing::debug!(
            model = %body.model,
            size = %body.size,
            quality = %body.quality,
            n = body.n,
            "sending image generation request"
        );

        let response = self
            .client
            .post(GENERATIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(service_error(status.as_u16(), &text));
        }

        let images: ImagesResponse = response.json().await?;
        tracing::debug!(count = images.data.len(), "image generation complete");

        collect_images(images.data)
    }
}

/// Builds the error for a non-success response.
///
/// The endpoint reports failures as `{"error": {"message": ...}}`; when the
/// body does not parse, the raw text stands in, and an empty body falls back
/// to the bare status code.
fn service_error(status: u16, body: &str) -> DalleError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                format!("HTTP {status}")
            } else {
                text.to_string()
            }
        });

    DalleError::Service { status, message }
}

fn collect_images(data: Vec<ImageData>) -> Result<Vec<GeneratedImage>> {
    data.into_iter()
        .map(|entry| {
            let url = entry.url.ok_or_else(|| {
                DalleError::UnexpectedResponse("response entry contained no image URL".into())
            })?;
            Ok(GeneratedImage {
                url,
                revised_prompt: entry.revised_prompt,
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ImagesRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
    quality: String,
}

impl ImagesRequest {
    fn from_config(config: &RequestConfig) -> Self {
        Self {
            model: config.model.clone(),
            prompt: config.prompt.clone(),
            n: config.number,
            size: config.size.clone(),
            quality: config.quality.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}
