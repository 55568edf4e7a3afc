use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::ProviderError;
use crate::providers::Translator;

/// Translate client for the translation API
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API key appended as a URL query parameter
    api_key: String,
    /// Translate endpoint URL
    endpoint: String,
}

// Manual Debug so the API key never lands in logs
impl fmt::Debug for GoogleTranslate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslate")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Translate response body
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

/// Payload wrapper in the translate response
#[derive(Debug, Deserialize, Default)]
pub struct TranslateData {
    #[serde(default)]
    pub translations: Vec<TranslationEntry>,
}

/// A single translation result
#[derive(Debug, Deserialize)]
pub struct TranslationEntry {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl GoogleTranslate {
    /// Create a new translate client
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

    /// Extract the first translation from a translate response
    pub fn first_translation(response: TranslateResponse) -> Result<String, ProviderError> {
        response
            .data
            .translations
            .into_iter()
            .next()
            .map(|entry| entry.translated_text)
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("q", text),
                ("source", source),
                ("target", target),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                ProviderError::RequestFailed(format!("Failed to send translate request: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translate API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let translate = response.json::<TranslateResponse>().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse translate response: {}", e))
        })?;

        Self::first_translation(translate)
    }
}
