// Recommendation client for the hosted generative model.
//
// Calls the Gemini generateContent REST API with a declared response
// schema and the search grounding tool, then parses the returned text
// as a RecommendationResponse.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use propseek_config::ai::ResolvedAiConfig;
use propseek_model::{GroundingSource, Language, RecommendationResponse};

use crate::fixture;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// A hung model call must not block the shell forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Error from a recommendation request.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// No API key configured
    MissingKey,
    /// Network error
    Network(String),
    /// API error response
    Api { status: u16, message: String },
    /// Failed to parse the model's JSON output
    Parse(String),
    /// Model returned an unexpected shape (no candidates, no text part)
    InvalidResponse(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::MissingKey => write!(f, "API key not configured"),
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            ClientError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
            ClientError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Sentinel query: a deterministic demo/test path that returns the
/// language's fixture without any network traffic.
pub fn is_sentinel(query: &str) -> bool {
    matches!(query.trim().to_lowercase().as_str(), "test" | "teszt")
}

// ============================================================================
// Wire types (generateContent request/response)
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: InstructionContent,
    contents: Vec<Content>,
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct InstructionContent {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    title: Option<String>,
    uri: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Recommendation client (blocking).
#[derive(Clone)]
pub struct RecommendationClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl RecommendationClient {
    pub fn new(api_key: String, model: String) -> Result<Self, ClientError> {
        Self::with_api_base(api_key, model, GEMINI_API_BASE.to_string())
    }

    pub fn with_api_base(
        api_key: String,
        model: String,
        api_base: String,
    ) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self {
            http,
            api_base,
            api_key,
            model,
        })
    }

    /// Build a client from the resolved AI configuration.
    ///
    /// Fails with `MissingKey` when no key could be resolved.
    pub fn from_config(config: &ResolvedAiConfig) -> Result<Self, ClientError> {
        let key = config.api_key.clone().ok_or(ClientError::MissingKey)?;
        match &config.api_base {
            Some(base) => Self::with_api_base(key, config.model.clone(), base.clone()),
            None => Self::new(key, config.model.clone()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch recommendations for a free-text query.
    ///
    /// The sentinel query returns the language's fixture immediately.
    /// This is a blocking call - use in a background task.
    pub fn fetch(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<RecommendationResponse, ClientError> {
        if is_sentinel(query) {
            return Ok(fixture::for_lang(lang));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let request = build_request(query, lang);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::InvalidResponse("no candidates in response".to_string()))?;

        let text = candidate
            .content
            .as_ref()
            .and_then(|c| c.parts.iter().find_map(|p| p.text.clone()))
            .ok_or_else(|| ClientError::InvalidResponse("no text part in candidate".to_string()))?;

        let mut parsed = parse_response_text(&text)?;
        parsed.sources = map_grounding_sources(candidate.grounding_metadata);
        Ok(parsed)
    }
}

// ============================================================================
// Request construction
// ============================================================================

fn system_instruction(lang: Language) -> String {
    format!(
        r#"You are the intelligent property assistant of the Pécs Asset Management (PVH) rental portfolio.
Respond in the user's language ({lang}).

Your task:
1. Find the most suitable properties on https://ingatlanok.pvh.hu/kiado-ingatlanok/.
2. Give a precise reason why you recommend each one.
3. When you find auction/tender data (deadline, deposit), always fill in auctionInfo.
4. When nothing matches, return an empty suggestions list.

Every response must be valid JSON."#,
        lang = lang.code()
    )
}

/// Declared output schema: `summary` and `suggestions` required, each
/// suggestion requires title/link/reason/description/pros/cons.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "price": { "type": "STRING" },
                        "location": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "link": { "type": "STRING" },
                        "imageUrl": { "type": "STRING" },
                        "reason": { "type": "STRING" },
                        "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "pros": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "cons": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "auctionInfo": {
                            "type": "OBJECT",
                            "properties": {
                                "deadline": { "type": "STRING" },
                                "type": { "type": "STRING" },
                                "deposit": { "type": "STRING" }
                            }
                        }
                    },
                    "required": ["title", "link", "reason", "description", "pros", "cons"]
                }
            }
        },
        "required": ["summary", "suggestions"]
    })
}

fn build_request(query: &str, lang: Language) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: InstructionContent {
            parts: vec![TextPart {
                text: system_instruction(lang),
            }],
        },
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![TextPart {
                text: format!(
                    "User Query in {}: \"{}\". Analyze PVH properties and respond in JSON.",
                    lang.code(),
                    query
                ),
            }],
        }],
        tools: vec![Tool {
            google_search: json!({}),
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    }
}

// ============================================================================
// Response parsing
// ============================================================================

/// Parse the model's text output as a RecommendationResponse.
///
/// Tolerates prose or markdown fences around the JSON object by falling
/// back to the first `{` .. last `}` slice.
pub(crate) fn parse_response_text(text: &str) -> Result<RecommendationResponse, ClientError> {
    match serde_json::from_str(text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
                if start < end {
                    if let Ok(parsed) = serde_json::from_str(&text[start..=end]) {
                        return Ok(parsed);
                    }
                }
            }
            Err(ClientError::Parse(format!(
                "model output is not a recommendation object: {}",
                e
            )))
        }
    }
}

fn map_grounding_sources(metadata: Option<GroundingMetadata>) -> Vec<GroundingSource> {
    metadata
        .map(|m| m.grounding_chunks)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|chunk| chunk.web)
        .filter_map(|web| {
            let uri = web.uri.unwrap_or_default();
            if uri.is_empty() {
                return None;
            }
            Some(GroundingSource {
                title: web.title.unwrap_or_else(|| "Source".to_string()),
                uri,
            })
        })
        .collect()
}
