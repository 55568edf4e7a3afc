/*!
 * # Lenslate
 *
 * A Rust library for the capture-detect-translate workflow of a camera
 * text-recognition app: snap a photo, detect the text and its language
 * through a remote vision API, and optionally translate it into a chosen
 * target language.
 *
 * ## Features
 *
 * - Explicit session state machine; invalid state combinations are
 *   unrepresentable
 * - Text detection via the Vision annotate API (single best result, fixed
 *   language hints)
 * - Translation via the Translate v2 API
 * - Fixed supported-language catalog with typed lookups
 * - Injectable camera and process-exit collaborators for testing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `session`: Session state machine and models
 * - `capture`: Camera seam and encoded-image payloads
 * - `providers`: Clients for the remote services:
 *   - `providers::vision`: text-detection API client
 *   - `providers::translate`: translation API client
 * - `app_controller`: Main workflow controller
 * - `language_catalog`: Supported-language table and lookups
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod capture;
pub mod errors;
pub mod language_catalog;
pub mod providers;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ExitPort, ProcessExit};
pub use capture::{Camera, CaptureOptions, EncodedImage, FileCamera};
pub use errors::{AppError, CaptureError, ProviderError, WorkflowError};
pub use session::{Detection, FailureStage, Phase, Session};
