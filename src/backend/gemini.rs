//! Gemini generateContent client for image edits

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::backend::traits::{EditRequest, ImageEditBackend};
use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::payload::{base64, ImagePayload};

/// Hosted Gemini image-edit backend
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: ApiContent<'a>,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    parts: Vec<ApiRequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ApiRequestPart<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: ApiInlineData<'a>,
    },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiInlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

/// The parts of a generateContent response we look at
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ApiResponseContent {
    #[serde(default)]
    parts: Vec<ApiResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponsePart {
    #[serde(default, alias = "inline_data")]
    inline_data: Option<ApiResponseInlineData>,
}

#[derive(Debug, Deserialize)]
struct ApiResponseInlineData {
    #[serde(default)]
    data: Option<String>,
}

impl ApiResponse {
    /// First non-empty inline image across candidates, in order
    fn into_first_image(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.inline_data)
            .filter_map(|d| d.data)
            .find(|d| !d.is_empty())
    }
}

impl GeminiBackend {
    /// Create a new backend from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if config.key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Backend(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ImageEditBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn edit(&self, request: EditRequest) -> Result<ImagePayload> {
        let url = self.endpoint();
        debug!(model = %self.model, instruction = %request.instruction, "Sending edit request");

        let api_request = ApiRequest {
            contents: ApiContent {
                parts: vec![
                    ApiRequestPart::InlineData {
                        inline_data: ApiInlineData {
                            mime_type: request.image.media_type(),
                            data: base64::strip_data_url_prefix(&request.image.data),
                        },
                    },
                    ApiRequestPart::Text {
                        text: &request.instruction,
                    },
                ],
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&api_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "Image service returned {}: {}",
                status, body
            )));
        }

        let body = response.bytes().await?;
        let api_response: ApiResponse = serde_json::from_slice(&body)?;
        let candidates = api_response.candidates.len();

        match api_response.into_first_image() {
            Some(data) => {
                debug!(model = %self.model, candidates, size = data.len(), "Received edited image");
                Ok(ImagePayload::generated(data))
            }
            None => {
                debug!(model = %self.model, candidates, "Response carried no inline image");
                Err(AppError::NoImageGenerated)
            }
        }
    }
}
