// SPDX-License-Identifier: MPL-2.0
//! Generative image API client.
//!
//! Adapter for a `generateContent`-shaped REST endpoint that accepts an
//! inline image plus a text instruction and answers with inline image parts.
//! All wire types are private to this module; callers see only
//! [`GenerationClient`], [`GeneratedImage`], and [`GenerateError`].
//!
//! The client is constructed once at startup from config values and the API
//! key, then cheaply cloned because `reqwest::Client` is an `Arc` internally.
//! One transform request is a single round-trip: no retry, no queuing, no
//! cancellation.

use crate::app::config::GenerationConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ICED_ATELIER_API_KEY";

/// Legacy fallback key variable, kept for parity with earlier deployments.
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";

/// Reads the API key from the environment.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(ENV_API_KEY)
        .or_else(|_| std::env::var(ENV_API_KEY_FALLBACK))
        .ok()
        .filter(|k| !k.trim().is_empty())
}

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    #[error("transform request failed: {0}")]
    Request(String),
    #[error("the model did not return an image")]
    EmptyResponse,
    #[error("could not decode returned image: {0}")]
    Decode(String),
}

impl From<GenerateError> for crate::error::Error {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Request(msg) => crate::error::Error::Network(msg),
            GenerateError::EmptyResponse => crate::error::Error::EmptyResult,
            GenerateError::Decode(msg) => crate::error::Error::Decode(msg),
        }
    }
}

// ── Result type ───────────────────────────────────────────────────────────────

/// A stylized image returned by the API, replaced wholesale per generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    /// Data URI form, used for the clipboard copy action.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }

    /// Extension matching the MIME type, for default save names.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpeg",
        }
    }
}

/// Builds the natural-language instruction embedding the style choice.
pub fn style_instruction(style: &str) -> String {
    format!(
        "Transform this photo into a/an {style} style masterpiece. \
         Maintain the core subject and composition of the original image \
         while fully embracing the artistic characteristics of the chosen style."
    )
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Adapter for the image generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: Client,
    api_base_url: String,
    model: String,
    api_key: String,
}

impl GenerationClient {
    /// Build a client from config values and the API key.
    pub fn new(config: &GenerationConfig, api_key: String) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.clamped_timeout_secs()))
            .build()
            .map_err(|e| GenerateError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }

    /// Submits the photo and style choice, returning the stylized image.
    ///
    /// `photo_base64` is the base64 payload of the input image and
    /// `mime_type` its type. The style name is embedded in the text
    /// instruction; the request asks for an IMAGE response modality.
    pub async fn transform(
        &self,
        photo_base64: String,
        mime_type: String,
        style: String,
    ) -> Result<GeneratedImage, GenerateError> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type,
                            data: photo_base64,
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(style_instruction(&style)),
                    },
                ],
            }],
            generation_config: ModalityConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        };

        debug!(model = %self.model, %style, "sending transform request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.endpoint(), error = %e, "transform request failed (transport)");
                GenerateError::Request(e.to_string())
            })?;

        let response = check_status(response).await?;

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                error!(error = %e, "failed to deserialize transform response");
                GenerateError::Request(format!("failed to parse response body: {e}"))
            })?;

        debug!(candidates = parsed.candidates.len(), "received transform response");

        extract_image(parsed)
    }
}

/// Pulls the first inline image part out of the response.
fn extract_image(response: GenerateContentResponse) -> Result<GeneratedImage, GenerateError> {
    let inline = response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.inline_data)
        .ok_or(GenerateError::EmptyResponse)?;

    let bytes = BASE64
        .decode(inline.data.as_bytes())
        .map_err(|e| GenerateError::Decode(e.to_string()))?;

    if bytes.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    let mime_type = if inline.mime_type.is_empty() {
        "image/jpeg".to_string()
    } else {
        inline.mime_type
    };

    Ok(GeneratedImage { mime_type, bytes })
}

/// Consume the response and return it if successful, or a structured error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GenerateError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = if let Ok(env) = serde_json::from_str::<ErrorEnvelope>(&body) {
        format!("HTTP {status}: {}", env.error.message)
    } else {
        format!("HTTP {status}: {body}")
    };

    error!(%status, %message, "transform request returned HTTP error");
    Err(GenerateError::Request(message))
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: ModalityConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModalityConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

// Error envelope used by the API.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::GenerationConfig;

    #[test]
    fn instruction_embeds_style_name() {
        let prompt = style_instruction("Cartoon");
        assert!(prompt.contains("a/an Cartoon style masterpiece"));
        assert!(prompt.contains("core subject and composition"));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let mut config = GenerationConfig::default();
        config.api_base_url = "https://api.example/".to_string();
        config.model = "paint-v2".to_string();
        let client = GenerationClient::new(&config, "k".into()).expect("client");
        assert_eq!(
            client.endpoint(),
            "https://api.example/v1beta/models/paint-v2:generateContent"
        );
    }

    #[test]
    fn request_serializes_camel_case_wire_shape() {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: "image/png".into(),
                            data: "QUJD".into(),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some("hello".into()),
                    },
                ],
            }],
            generation_config: ModalityConfig {
                response_modalities: vec!["IMAGE".into()],
            },
        };

        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/png"
        );
        // The text part must not carry a null inlineData field.
        assert!(json["contents"][0]["parts"][1]
            .as_object()
            .unwrap()
            .get("inlineData")
            .is_none());
    }

    #[test]
    fn extract_image_takes_first_inline_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "here you go"},
                            {"inlineData": {"mimeType": "image/png", "data": "QUJD"}}
                        ]
                    }
                }]
            }"#,
        )
        .expect("parse");

        let image = extract_image(response).expect("image");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"ABC");
    }

    #[test]
    fn extract_image_without_inline_part_is_empty_result() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "sorry"}]}}]}"#,
        )
        .expect("parse");

        assert!(matches!(
            extract_image(response),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn extract_image_without_candidates_is_empty_result() {
        let response: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert!(matches!(
            extract_image(response),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn extract_image_rejects_invalid_base64() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [
                {"inlineData": {"mimeType": "image/png", "data": "@@not-base64@@"}}
            ]}}]}"#,
        )
        .expect("parse");

        assert!(matches!(
            extract_image(response),
            Err(GenerateError::Decode(_))
        ));
    }

    #[test]
    fn empty_mime_defaults_to_jpeg() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [
                {"inlineData": {"data": "QUJD"}}
            ]}}]}"#,
        )
        .expect("parse");

        let image = extract_image(response).expect("image");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn data_uri_has_expected_shape() {
        let image = GeneratedImage {
            mime_type: "image/jpeg".into(),
            bytes: b"ABC".to_vec(),
        };
        assert_eq!(image.data_uri(), "data:image/jpeg;base64,QUJD");
    }

    #[test]
    fn generate_error_maps_to_app_error() {
        use crate::error::Error;
        assert!(matches!(
            Error::from(GenerateError::EmptyResponse),
            Error::EmptyResult
        ));
        assert!(matches!(
            Error::from(GenerateError::Request("x".into())),
            Error::Network(_)
        ));
        assert!(matches!(
            Error::from(GenerateError::Decode("x".into())),
            Error::Decode(_)
        ));
    }

    #[tokio::test]
    async fn transform_reports_transport_failure() {
        let mut config = GenerationConfig::default();
        config.api_base_url = "http://127.0.0.1:9".to_string();
        let client = GenerationClient::new(&config, "key".into()).expect("client");

        match client
            .transform("QUJD".into(), "image/png".into(), "Cartoon".into())
            .await
        {
            Err(GenerateError::Request(_)) => {}
            other => panic!("expected request error, got {other:?}"),
        }
    }
}
