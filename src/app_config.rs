use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

use crate::capture::CaptureOptions;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key shared by the detection and translation services,
    /// appended to every request as a URL query parameter
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Text-detection service config
    #[serde(default)]
    pub vision: VisionConfig,

    /// Translation service config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Capture-device config
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Text-detection service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VisionConfig {
    /// Annotate endpoint URL
    #[serde(default = "default_vision_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_vision_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translate endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Capture-device configuration, passed through to the camera unchanged
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptureConfig {
    /// Target width of the captured frame in pixels
    #[serde(default = "default_target_width")]
    pub target_width: u32,

    /// Crop the frame to the preview aspect ratio
    #[serde(default = "default_true")]
    pub crop_to_preview: bool,

    /// Apply the device orientation fix before encoding
    #[serde(default = "default_true")]
    pub fix_orientation: bool,
}

impl CaptureConfig {
    /// Build the options handed to the camera collaborator
    pub fn options(&self) -> CaptureOptions {
        CaptureOptions {
            target_width: self.target_width,
            crop_to_preview: self.crop_to_preview,
            fix_orientation: self.fix_orientation,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            target_width: default_target_width(),
            crop_to_preview: true,
            fix_orientation: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_vision_endpoint() -> String {
    "https://vision.googleapis.com/v1/images:annotate".to_string()
}

fn default_translation_endpoint() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_target_width() -> u32 {
    720
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = std::io::BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!(
                "API key is required for the detection and translation services"
            ));
        }

        Url::parse(&self.vision.endpoint)
            .map_err(|e| anyhow!("Invalid vision endpoint '{}': {}", self.vision.endpoint, e))?;

        Url::parse(&self.translation.endpoint).map_err(|e| {
            anyhow!(
                "Invalid translation endpoint '{}': {}",
                self.translation.endpoint,
                e
            )
        })?;

        if self.capture.target_width == 0 {
            return Err(anyhow!("Capture target width must be non-zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            vision: VisionConfig::default(),
            translation: TranslationConfig::default(),
            capture: CaptureConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
