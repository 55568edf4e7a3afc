use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::capture::EncodedImage;
use crate::errors::ProviderError;
use crate::providers::TextDetector;
use crate::session::Detection;

/// Language hints sent with every annotate request. Fixed per deployment,
/// not user-configurable.
pub const LANGUAGE_HINTS: &[&str] = &["en-t-i0-handwrit", "zh-CN", "zh-TW", "ja"];

/// Feature type requested from the annotate endpoint
const FEATURE_TEXT_DETECTION: &str = "TEXT_DETECTION";

/// Vision client for the text-detection API
pub struct GoogleVision {
    /// HTTP client for API requests
    client: Client,
    /// API key appended as a URL query parameter
    api_key: String,
    /// Annotate endpoint URL
    endpoint: String,
}

// Manual Debug so the API key never lands in logs
impl fmt::Debug for GoogleVision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleVision")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Annotate request body
#[derive(Debug, Serialize)]
pub struct AnnotateRequest<'a> {
    /// Annotation entries; the workflow always sends exactly one
    pub requests: Vec<AnnotateEntry<'a>>,
}

/// One annotation entry: image payload, requested features, language hints
#[derive(Debug, Serialize)]
pub struct AnnotateEntry<'a> {
    pub image: ImagePayload<'a>,
    pub features: Vec<Feature>,
    #[serde(rename = "imageContext")]
    pub image_context: ImageContext,
}

/// Base64 image content. Must not contain line breaks; the endpoint rejects
/// payloads with them.
#[derive(Debug, Serialize)]
pub struct ImagePayload<'a> {
    pub content: &'a str,
}

/// Requested annotation feature
#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

/// Context hints for the annotation
#[derive(Debug, Serialize)]
pub struct ImageContext {
    #[serde(rename = "languageHints")]
    pub language_hints: Vec<&'static str>,
}

/// Annotate response body
#[derive(Debug, Deserialize)]
pub struct AnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateResult>,
}

/// Per-entry annotation result
#[derive(Debug, Deserialize, Default)]
pub struct AnnotateResult {
    #[serde(rename = "textAnnotations", default)]
    pub text_annotations: Vec<TextAnnotation>,
}

/// A single text annotation
#[derive(Debug, Deserialize)]
pub struct TextAnnotation {
    /// Detected text
    pub description: String,
    /// Locale code the service tagged the text with; absent on some results
    #[serde(default)]
    pub locale: Option<String>,
}

impl GoogleVision {
    /// Create a new vision client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the annotate request body for an image: text detection limited
    /// to the single best result, with the fixed language hints
    pub fn build_request(image: &EncodedImage) -> AnnotateRequest<'_> {
        AnnotateRequest {
            requests: vec![AnnotateEntry {
                image: ImagePayload {
                    content: image.as_base64(),
                },
                features: vec![Feature {
                    feature_type: FEATURE_TEXT_DETECTION,
                    max_results: 1,
                }],
                image_context: ImageContext {
                    language_hints: LANGUAGE_HINTS.to_vec(),
                },
            }],
        }
    }

    /// Extract the first text annotation from an annotate response.
    /// A missing or empty annotation list is `EmptyResponse`; a missing
    /// locale tag becomes an empty code, which no lookup table contains.
    pub fn first_annotation(response: AnnotateResponse) -> Result<Detection, ProviderError> {
        let result = response
            .responses
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse)?;

        let annotation = result
            .text_annotations
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(Detection::new(
            annotation.description,
            annotation.locale.unwrap_or_default(),
        ))
    }
}

#[async_trait]
impl TextDetector for GoogleVision {
    async fn detect(&self, image: &EncodedImage) -> Result<Detection, ProviderError> {
        let body = Self::build_request(image);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                ProviderError::RequestFailed(format!("Failed to send annotate request: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Vision API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let annotate = response.json::<AnnotateResponse>().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse annotate response: {}", e))
        })?;

        Self::first_annotation(annotate)
    }
}
