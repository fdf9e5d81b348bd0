pub mod wire;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::generator::TextGenerator;

use wire::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, error_message_or};

use common::RedactedApiKey;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MODELS_PATH_SEGMENT: &str = "models/";
const GENERATE_CONTENT_METHOD: &str = ":generateContent";
const UNKNOWN_STATUS_REASON: &str = "unknown error";

/// Client for Gemini's `generateContent` endpoint.
///
/// Built once at startup from the validated credential and config, then
/// shared by reference with the dispatcher for the life of the process.
#[derive(Clone)]
pub struct GeminiClient {
    endpoint: Url,
    client: Client,
    api_key: RedactedApiKey,
    model: String,
    generation_config: Option<GenerationConfig>,
}

impl GeminiClient {
    pub fn new(config: &GeneratorConfig, api_key: RedactedApiKey) -> Result<Self, GenerateError> {
        let base_url = Url::parse(&config.normalized_api_base_url())?;
        let endpoint = base_url.join(&format!(
            "{MODELS_PATH_SEGMENT}{}{GENERATE_CONTENT_METHOD}",
            config.model
        ))?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            endpoint,
            client,
            api_key,
            model: config.model.clone(),
            generation_config: config.generation_config(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, request: &str) -> Result<String, GenerateError> {
        let body = GenerateContentRequest::single_turn(request, self.generation_config.clone());

        debug!(
            "POST {} (model={}, {} prompt chars)",
            self.endpoint,
            self.model,
            request.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Gemini returned HTTP {}", status.as_u16());
            let body = response
                .text()
                .await
                .inspect_err(|e| warn!("Failed to read error body: {e}"))
                .ok();
            let fallback = status.canonical_reason().unwrap_or(UNKNOWN_STATUS_REASON);
            return Err(GenerateError::from_http_response(
                status.as_u16(),
                error_message_or(body.as_deref(), fallback),
            ));
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        parsed
            .first_candidate_text()
            .ok_or_else(|| GenerateError::empty_response(parsed.empty_reason()))
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("model", &self.model)
            .field("api_key", &self.api_key)
            .finish()
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &str) -> Result<String, GenerateError> {
        self.generate_content(request).await
    }
}
