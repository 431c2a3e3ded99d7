//! Gemini `generateContent` client with structured JSON output.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{parse_rules, GenerationRequest, RuleGenerator};
use crate::config::ModelSettings;
use crate::error::{ConfigError, GenerationError};
use crate::models::Rule;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Longest error body kept from a failed response
const MAX_ERROR_BODY: usize = 500;

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(settings: &ModelSettings) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl RuleGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Rule>, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        info!(model = %self.model, prompt_chars = request.instruction.len(), "sending generation request");

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request_body(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        check_status(status, &body)?;

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = candidate_text(parsed).ok_or(GenerationError::EmptyResponse)?;
        debug!(chars = text.len(), "model returned text");

        parse_rules(&text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<OutgoingPart<'a>>,
}

#[derive(Debug, Serialize)]
struct OutgoingPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<IncomingPart>,
}

#[derive(Debug, Deserialize)]
struct IncomingPart {
    text: Option<String>,
}

fn request_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![OutgoingPart {
                text: &request.instruction,
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: request.response_mime_type,
            response_schema: &request.schema,
        },
    }
}

/// Non-2xx responses become `Status`, keeping a bounded prefix of the body
fn check_status(status: reqwest::StatusCode, body: &str) -> Result<(), GenerationError> {
    if status.is_success() {
        return Ok(());
    }
    Err(GenerationError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    })
}

/// Concatenated text parts of the first candidate, if any are non-blank
fn candidate_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn settings(api_key: Option<&str>) -> ModelSettings {
        ModelSettings {
            api_key: api_key.map(String::from),
            model: "gemini-test".to_string(),
            endpoint: "https://example.invalid/v1beta/".to_string(),
            request_timeout: Some(Duration::from_secs(5)),
        }
    }

    #[test]
    fn test_url_joins_endpoint_and_model() {
        let client = GeminiClient::new(&settings(Some("k"))).unwrap();
        assert_eq!(
            client.url(),
            "https://example.invalid/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest::for_prompt("Finance rules").unwrap();
        let body = serde_json::to_value(request_body(&request)).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], json!(request.instruction));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], request.schema);
    }

    #[test]
    fn test_candidate_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "[{\"a\":" }, { "text": "1}]" }] }
            }]
        }))
        .unwrap();
        assert_eq!(candidate_text(response).as_deref(), Some("[{\"a\":1}]"));
    }

    #[test]
    fn test_candidate_text_missing() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert_eq!(candidate_text(response), None);
    }

    #[test]
    fn test_success_status_passes() {
        assert!(check_status(reqwest::StatusCode::OK, "{}").is_ok());
    }

    #[test]
    fn test_error_status_keeps_truncated_body() {
        let body = "é".repeat(MAX_ERROR_BODY + 100);
        let err = check_status(reqwest::StatusCode::TOO_MANY_REQUESTS, &body).unwrap_err();
        match err {
            GenerationError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body.chars().count(), MAX_ERROR_BODY);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stalled_endpoint_maps_to_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection and never answer
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            std::future::pending::<()>().await;
        });

        let client = GeminiClient::new(&ModelSettings {
            endpoint: format!("http://{addr}"),
            request_timeout: Some(Duration::from_millis(200)),
            ..settings(Some("k"))
        })
        .unwrap();
        let request = GenerationRequest::for_prompt("anything").unwrap();
        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Timeout), "got {err:?}");
        assert_eq!(err.user_message(), crate::error::GENERATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let client = GeminiClient::new(&settings(None)).unwrap();
        let request = GenerationRequest::for_prompt("anything").unwrap();
        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }
}
