/*!
 * Camera capture abstraction.
 *
 * The camera is an external collaborator: the workflow only needs something
 * that produces an encoded image on demand. `Camera` is the seam, and
 * `FileCamera` is the file-backed implementation the CLI uses in place of
 * real camera hardware.
 */

use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::errors::CaptureError;

/// Capture-device configuration passed through to the camera unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Target width of the captured frame in pixels
    pub target_width: u32,
    /// Crop the frame to the preview aspect ratio
    pub crop_to_preview: bool,
    /// Apply the device orientation fix before encoding
    pub fix_orientation: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            target_width: 720,
            crop_to_preview: true,
            fix_orientation: true,
        }
    }
}

/// A base64-encoded image payload ready for transmission.
///
/// Some encoders emit line breaks inside base64 output and the detection
/// service rejects payloads containing them, so the constructors strip all
/// whitespace up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    content: String,
}

impl EncodedImage {
    /// Wrap an already-encoded payload, stripping newlines and whitespace
    pub fn from_base64(raw: impl AsRef<str>) -> Self {
        let content = raw
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Self { content }
    }

    /// Encode raw image bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            content: STANDARD.encode(bytes),
        }
    }

    /// The base64 payload, guaranteed free of line breaks
    pub fn as_base64(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Capture device seam
///
/// Implementations may fail (permission denied, hardware error); callers are
/// expected to return the session to idle when that happens.
#[async_trait]
pub trait Camera: Send + Sync + Debug {
    /// Capture one frame and return it as an encoded image
    async fn capture(&self, options: &CaptureOptions) -> Result<EncodedImage, CaptureError>;
}

/// Camera stand-in that serves a photo from disk
#[derive(Debug, Clone)]
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Camera for FileCamera {
    async fn capture(&self, _options: &CaptureOptions) -> Result<EncodedImage, CaptureError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CaptureError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        Ok(EncodedImage::from_bytes(&bytes))
    }
}
