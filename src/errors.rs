/*!
 * Error types for the lenslate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when capturing a photo from the camera collaborator
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Camera permission was denied by the user or platform
    #[error("Camera permission denied")]
    PermissionDenied,

    /// Camera hardware is missing or could not be opened
    #[error("Camera unavailable: {0}")]
    Unavailable(String),

    /// The captured frame could not be encoded
    #[error("Failed to encode captured frame: {0}")]
    Encoding(String),
}

/// Errors that can occur when working with the remote detection and
/// translation service APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The API answered successfully but carried no usable result
    #[error("API response contained no results")]
    EmptyResponse,

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during the capture-detect-translate workflow,
/// tagged with the stage that produced them
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The camera collaborator failed
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    /// The text detection call failed
    #[error("Text detection failed: {0}")]
    Detection(ProviderError),

    /// The translation call failed
    #[error("Translation failed: {0}")]
    Translation(ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a remote service provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the workflow
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
