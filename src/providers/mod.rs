/*!
 * Provider implementations for the remote detection and translation services.
 *
 * This module contains client implementations for the two outbound APIs:
 * - Vision: text detection over a captured image
 * - Translate: text translation between two locale codes
 */

use std::fmt::Debug;

use async_trait::async_trait;

use crate::capture::EncodedImage;
use crate::errors::ProviderError;
use crate::session::Detection;

/// Seam for the text-detection remote service
///
/// One call per captured image; implementations never retry automatically.
#[async_trait]
pub trait TextDetector: Send + Sync + Debug {
    /// Detect text in an encoded image
    ///
    /// # Returns
    /// * `Result<Detection, ProviderError>` - the best text annotation with
    ///   its locale tag, or an error (network failure, non-2xx status, or an
    ///   empty annotation list)
    async fn detect(&self, image: &EncodedImage) -> Result<Detection, ProviderError>;
}

/// Seam for the translation remote service
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate text from a source locale to a target locale
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - the translated text, or an error
    ///   (network failure, non-2xx status, or an empty translation list)
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;
}

pub mod translate;
pub mod vision;
