use crate::config::toml_config::GenerativeSettings;
use crate::domain::ports::{GenerativeClient, ResponseFormat};
use crate::utils::error::{FolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` REST call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Fails with [`FolioError::MissingCredential`] when no API key is set.
    pub fn new(settings: &GenerativeSettings) -> Result<Self> {
        let api_key = settings.api_key().ok_or(FolioError::MissingCredential)?;

        // No timeout unless configured; the request waits on the transport.
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: settings.endpoint().trim_end_matches('/').to_string(),
            model: settings.model().to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: match format {
                ResponseFormat::Text => None,
                ResponseFormat::Json => Some(GenerationConfig {
                    response_mime_type: "application/json",
                }),
            },
        };

        let url = self.url();
        tracing::debug!("Calling generative API: {} ({:?})", url, format);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Generative API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FolioError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(FolioError::MalformedResponse {
                message: "response carried no candidate text".to_string(),
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn settings(endpoint: &str, api_key: Option<&str>) -> GenerativeSettings {
        GenerativeSettings {
            endpoint: Some(endpoint.to_string()),
            model: Some("gemini-1.5-flash".to_string()),
            api_key: api_key.map(str::to_string),
            timeout_seconds: None,
        }
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let result = GeminiClient::new(&settings("https://example.com", None));
        assert!(matches!(result, Err(FolioError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_json_format_sets_mime_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-1.5-flash:generateContent")
                .header("x-goog-api-key", "k")
                .json_body_partial(
                    r#"{"generationConfig": {"responseMimeType": "application/json"}}"#,
                );
            then.status(200).json_body(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "[\"Rust\"]"}]}}]
            }));
        });

        let client = GeminiClient::new(&settings(&server.base_url(), Some("k"))).unwrap();
        let text = client.generate("list", ResponseFormat::Json).await.unwrap();

        mock.assert();
        assert_eq!(text, "[\"Rust\"]");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(403).body("denied");
        });

        let client = GeminiClient::new(&settings(&server.base_url(), Some("k"))).unwrap();
        let err = client
            .generate("x", ResponseFormat::Text)
            .await
            .unwrap_err();

        assert!(matches!(err, FolioError::ApiStatusError { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_empty_candidates_are_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let client = GeminiClient::new(&settings(&server.base_url(), Some("k"))).unwrap();
        let err = client
            .generate("x", ResponseFormat::Text)
            .await
            .unwrap_err();

        assert!(matches!(err, FolioError::MalformedResponse { .. }));
    }
}
