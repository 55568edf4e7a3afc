/*!
 * Session models for the capture-detect-translate workflow.
 *
 * The session is modeled as a tagged-variant state machine: each phase
 * carries exactly the data that phase guarantees to exist, so invalid
 * combinations (a translation without a detected locale, for example) are
 * unrepresentable.
 */

use crate::language_catalog;

/// Result of one successful detection call.
///
/// Text and locale always arrive together; a session either has both or
/// neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Raw detected text as the service returned it
    pub text: String,
    /// Locale code the service tagged the text with.
    /// Not necessarily in the supported table.
    pub locale: String,
}

impl Detection {
    pub fn new(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
        }
    }

    /// Detected text with internal line breaks collapsed to single spaces
    /// for display
    pub fn display_text(&self) -> String {
        self.text
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Display name of the detected language, `None` when the locale is
    /// outside the supported table
    pub fn display_language(&self) -> Option<&'static str> {
        language_catalog::display_name(&self.locale)
    }
}

/// Which stage of the workflow a failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Capture,
    Detection,
    Translation,
}

/// Discrete state of a session within the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to trigger a capture
    Idle,
    /// The camera collaborator is producing an encoded image
    Capturing,
    /// The detection request is in flight
    Detecting,
    /// Detected text and locale are available
    Detected { detection: Detection },
    /// A translation request is in flight for the chosen target
    Translating { detection: Detection, target: String },
    /// Translated text is available alongside the original
    Translated {
        detection: Detection,
        target: String,
        translated_text: String,
    },
    /// The detected locale is not in the supported table; close is the only
    /// action offered
    Unsupported { detection: Detection },
    /// A detection or translation call failed. A translation failure keeps
    /// the detection so the user can pick another target.
    Failed {
        stage: FailureStage,
        detection: Option<Detection>,
        message: String,
    },
}

impl Phase {
    /// Short lowercase phase name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Capturing => "capturing",
            Phase::Detecting => "detecting",
            Phase::Detected { .. } => "detected",
            Phase::Translating { .. } => "translating",
            Phase::Translated { .. } => "translated",
            Phase::Unsupported { .. } => "unsupported",
            Phase::Failed { .. } => "failed",
        }
    }
}

/// One capture-to-close cycle.
///
/// Holds the current phase, the busy flag gating duplicate user intents, and
/// an epoch counter that increments on every reset. Remote responses that
/// resolve after a reset carry a stale epoch and are dropped instead of
/// corrupting the new session.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    busy: bool,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            busy: false,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether an operation awaiting a remote response is in flight.
    /// Gates the shutter and the language picker.
    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Enter a phase that starts a remote span; raises the busy flag
    pub fn begin(&mut self, phase: Phase) {
        self.phase = phase;
        self.busy = true;
    }

    /// Move between phases within one remote span; the busy flag stays up
    pub fn advance(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Enter a terminal phase for the current operation; clears the busy flag
    pub fn settle(&mut self, phase: Phase) {
        self.phase = phase;
        self.busy = false;
    }

    /// Full reset on close: all fields cleared, phase back to idle, epoch
    /// bumped so in-flight responses for the old session get dropped
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.busy = false;
        self.epoch += 1;
    }

    /// Detected text, when a detection outcome is held
    pub fn detected_text(&self) -> Option<&str> {
        self.detection().map(|d| d.text.as_str())
    }

    /// Detected locale code, when a detection outcome is held
    pub fn detected_locale(&self) -> Option<&str> {
        self.detection().map(|d| d.locale.as_str())
    }

    /// The chosen target locale, while translating or translated
    pub fn target_locale(&self) -> Option<&str> {
        match &self.phase {
            Phase::Translating { target, .. } | Phase::Translated { target, .. } => {
                Some(target.as_str())
            }
            _ => None,
        }
    }

    /// Translated text, only in the translated phase
    pub fn translated_text(&self) -> Option<&str> {
        match &self.phase {
            Phase::Translated { translated_text, .. } => Some(translated_text.as_str()),
            _ => None,
        }
    }

    fn detection(&self) -> Option<&Detection> {
        match &self.phase {
            Phase::Detected { detection }
            | Phase::Translating { detection, .. }
            | Phase::Translated { detection, .. }
            | Phase::Unsupported { detection } => Some(detection),
            Phase::Failed {
                detection: Some(detection),
                ..
            } => Some(detection),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
