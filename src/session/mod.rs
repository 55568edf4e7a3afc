/*!
 * Session state for the capture-detect-translate workflow.
 *
 * This module provides:
 * - The `Phase` state machine a session moves through
 * - The `Session` holder with its busy flag and reset epoch
 * - The `Detection` pair produced by a successful detection call
 */

pub mod models;

// Re-export main types
pub use models::{Detection, FailureStage, Phase, Session};
