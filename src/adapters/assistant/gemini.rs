//! Gemini Provider - implementation of AssistantProvider for Google's
//! generative-language API.
//!
//! Calls `models/{model}:generateContent` on the v1beta REST surface.
//! The request carries the system instruction separately from the
//! conversation contents; conversation roles are "user" and "model".
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = GeminiProvider::new(config);
//! ```
//!
//! Failed calls are not retried here: the gateway above converts any
//! failure into the user-facing fallback sentence, so a retry loop
//! would only delay that answer.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::chat::ChatRole;
use crate::ports::{AssistantError, AssistantProvider, ChatReply, ChatRequest, ProviderInfo};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Converts our request to Gemini's wire format.
    fn to_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let contents = request
            .turns
            .iter()
            .map(|turn| GeminiContent {
                role: Some(wire_role(turn.role).to_string()),
                parts: vec![GeminiPart {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        GeminiRequest {
            system_instruction: request.system_instruction.as_ref().map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: text.clone() }],
            }),
            contents,
            generation_config: request.temperature.map(|temperature| GenerationConfig {
                temperature: Some(temperature),
            }),
        }
    }

    /// Sends the request, mapping transport failures.
    async fn send_request(&self, request: &ChatRequest) -> Result<Response, AssistantError> {
        let gemini_request = Self::to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AssistantError::network(format!("Connection failed: {}", e))
                } else {
                    AssistantError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(response: Response) -> Result<Response, AssistantError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(map_error_status(status, &error_body))
    }

    /// Extracts the reply text from a successful response.
    fn extract_text(response: GeminiResponse) -> String {
        response
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
            .unwrap_or_default()
    }
}

/// Maps an error status code to the port error taxonomy.
fn map_error_status(status: StatusCode, error_body: &str) -> AssistantError {
    match status.as_u16() {
        401 | 403 => AssistantError::AuthenticationFailed,
        429 => AssistantError::rate_limited(60),
        400 => AssistantError::InvalidRequest(error_body.to_string()),
        500..=599 => {
            AssistantError::unavailable(format!("Server error {}: {}", status, error_body))
        }
        _ => AssistantError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Wire role for a chat role.
fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

#[async_trait]
impl AssistantProvider for GeminiProvider {
    async fn generate(&self, request: ChatRequest) -> Result<ChatReply, AssistantError> {
        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(ChatReply {
            text: Self::extract_text(gemini_response),
            model: self.config.model.clone(),
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", self.config.model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ChatTurn;

    #[test]
    fn request_maps_roles_to_user_and_model() {
        let request = ChatRequest::new()
            .with_system_instruction("persona")
            .with_turn(ChatTurn::model("Olá!"))
            .with_turn(ChatTurn::user("Oi"))
            .with_temperature(0.7);

        let wire = GeminiProvider::to_gemini_request(&request);
        assert_eq!(wire.contents.len(), 2);
        assert_eq!(wire.contents[0].role.as_deref(), Some("model"));
        assert_eq!(wire.contents[1].role.as_deref(), Some("user"));
        assert_eq!(wire.contents[1].parts[0].text, "Oi");
        assert_eq!(
            wire.system_instruction.unwrap().parts[0].text,
            "persona"
        );
        assert_eq!(wire.generation_config.unwrap().temperature, Some(0.7));
    }

    #[test]
    fn request_serializes_with_camel_case_sections() {
        let request = ChatRequest::new()
            .with_system_instruction("persona")
            .with_turn(ChatTurn::user("Oi"))
            .with_temperature(0.5);

        let json = serde_json::to_value(GeminiProvider::to_gemini_request(&request)).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert!(json.get("generationConfig").is_some());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Oi");
    }

    #[test]
    fn extract_text_joins_candidate_parts() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Olá, "}, {"text": "noivos!"}]
                }
            }]
        }))
        .unwrap();

        assert_eq!(GeminiProvider::extract_text(response), "Olá, noivos!");
    }

    #[test]
    fn extract_text_of_empty_response_is_empty() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(GeminiProvider::extract_text(response), "");
    }

    #[test]
    fn error_statuses_map_to_the_port_taxonomy() {
        assert!(matches!(
            map_error_status(StatusCode::UNAUTHORIZED, ""),
            AssistantError::AuthenticationFailed
        ));
        assert!(matches!(
            map_error_status(StatusCode::FORBIDDEN, ""),
            AssistantError::AuthenticationFailed
        ));
        assert!(matches!(
            map_error_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AssistantError::RateLimited { .. }
        ));
        assert!(matches!(
            map_error_status(StatusCode::BAD_REQUEST, "bad"),
            AssistantError::InvalidRequest(_)
        ));
        assert!(matches!(
            map_error_status(StatusCode::SERVICE_UNAVAILABLE, ""),
            AssistantError::Unavailable { .. }
        ));
    }
}
