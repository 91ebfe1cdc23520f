//! Minimal client for the Gemini `generateContent` REST endpoint.
//!
//! Speaks the v1beta JSON surface directly over [`reqwest`]. The model
//! is asked for a structured JSON document via `responseSchema`, and
//! the reply is unwrapped from the candidate envelope here so callers
//! only ever see a [`ConsultationPayload`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::AdviceConfig;
use crate::error::AdviceError;

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Production API base. Overridable for tests and proxies.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Client for one Gemini model behind one endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    http: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// The structured document the model is asked to produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultationPayload {
    #[serde(default)]
    pub advice: String,
    #[serde(rename = "actionItems", default)]
    pub action_items: Vec<String>,
}

impl GeminiClient {
    /// Client against the production endpoint with the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client honoring the model and endpoint from the configuration.
    pub fn from_config(api_key: impl Into<String>, config: &AdviceConfig) -> Self {
        Self::new(api_key)
            .with_model(&config.model)
            .with_endpoint(&config.endpoint)
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt and parse the structured reply.
    pub async fn generate(&self, prompt: &str) -> Result<ConsultationPayload, AdviceError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: consultation_schema(),
            },
        };

        debug!(model = %self.model, "requesting consultation");
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdviceError::Api {
                status: status.as_u16(),
                body: truncate_body(&body, 200),
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text: String = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(AdviceError::EmptyResponse);
        }

        let payload: ConsultationPayload = serde_json::from_str(strip_code_fence(text))?;
        Ok(payload)
    }
}

/// Response schema handed to the model. Gemini's schema dialect spells
/// JSON types in uppercase.
fn consultation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "advice": { "type": "STRING" },
            "actionItems": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        }
    })
}

/// Models sometimes wrap JSON in a Markdown fence despite the declared
/// mime type. Unwrap it before parsing.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn truncate_body(body: &str, limit: usize) -> String {
    if body.len() <= limit {
        return body.to_string();
    }
    // Never slice mid-codepoint.
    let mut end = limit;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
