/// Gemini `generateContent` provider.
///
/// Sends one non-streaming request per call with the map-grounding tool
/// declared, and pulls citations out of the candidate's grounding metadata.
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{Citation, GenerationRequest, GenerationResponse};
use super::prompt::DEFAULT_CITATION_TITLE;
use super::{GenerativeProvider, ProviderError};
use crate::config::AssistantConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ── Wire types ───────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GoogleMapsTool {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: GoogleMapsTool,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize, Default)]
struct MapsChunk {
    title: Option<String>,
    uri: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GroundingChunk {
    maps: Option<MapsChunk>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

// ── Conversion ───────────────────────────────────────────────────────

fn build_body(request: &GenerationRequest) -> GenerateContentRequest {
    let contents = request
        .turns
        .iter()
        .map(|t| Content {
            role: Some(t.role.to_string()),
            parts: vec![Part {
                text: Some(t.text.clone()),
            }],
        })
        .collect();

    let tools = if request.geographic_grounding {
        vec![Tool {
            google_maps: GoogleMapsTool {},
        }]
    } else {
        Vec::new()
    };

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: Some(request.system_instruction.clone()),
            }],
        },
        contents,
        tools,
        generation_config: GenerationConfig {
            temperature: request.temperature,
        },
    }
}

fn into_generation_response(resp: GenerateContentResponse) -> GenerationResponse {
    let Some(candidate) = resp.candidates.into_iter().next() else {
        return GenerationResponse::default();
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let grounding_citations = candidate
        .grounding_metadata
        .map(|m| {
            m.grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.maps)
                .filter_map(|maps| {
                    let uri = maps.uri.filter(|u| !u.is_empty())?;
                    let title = maps
                        .title
                        .filter(|t| !t.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_CITATION_TITLE.to_string());
                    Some(Citation { title, uri })
                })
                .collect()
        })
        .unwrap_or_default();

    GenerationResponse {
        principal_text: (!text.is_empty()).then_some(text),
        grounding_citations,
    }
}

/// Parse a raw `generateContent` JSON body.
pub fn parse_response(body: &str) -> Result<GenerationResponse, ProviderError> {
    let resp: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
    Ok(into_generation_response(resp))
}

// ── Provider ─────────────────────────────────────────────────────────

pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("climate-tutor/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("HTTP client build failed")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Build a provider from configuration, reading the key from the environment.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        Self::new(&config.base_url, config.resolve_api_key())
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let url = self.endpoint(&request.model);
        debug!(
            model = %request.model,
            turns = request.turns.len(),
            grounding = request.geographic_grounding,
            "Sending generateContent request"
        );

        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&build_body(request))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// ── Tests ────────────────────────────────────────────────────────────
