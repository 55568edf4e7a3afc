use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::app_config::Config;
use crate::capture::Camera;
use crate::errors::{ProviderError, WorkflowError};
use crate::language_catalog;
use crate::providers::translate::GoogleTranslate;
use crate::providers::vision::GoogleVision;
use crate::providers::{TextDetector, Translator};
use crate::session::{Detection, FailureStage, Phase, Session};

// @module: Controller for the capture-detect-translate workflow

/// Capability for terminating the process.
///
/// Injected so the workflow stays testable without a real process boundary.
/// The presentation layer must run its confirmation prompt before the
/// controller ever reaches this.
pub trait ExitPort: Send + Sync {
    fn exit(&self);
}

/// Exit port backed by `std::process::exit`
#[derive(Debug, Clone, Copy)]
pub struct ProcessExit;

impl ExitPort for ProcessExit {
    fn exit(&self) {
        std::process::exit(0);
    }
}

/// Main workflow controller.
///
/// Owns the single session and orchestrates the camera, detection, and
/// translation collaborators in response to user intents. One intent is
/// processed at a time; the session's busy flag disables the shutter and the
/// language picker while a remote call is outstanding.
pub struct Controller {
    // @field: App configuration
    config: Config,
    camera: Arc<dyn Camera>,
    detector: Arc<dyn TextDetector>,
    translator: Arc<dyn Translator>,
    exit_port: Box<dyn ExitPort>,
    session: Session,
}

impl Controller {
    /// Create a controller with explicit collaborators
    pub fn new(
        config: Config,
        camera: Arc<dyn Camera>,
        detector: Arc<dyn TextDetector>,
        translator: Arc<dyn Translator>,
        exit_port: Box<dyn ExitPort>,
    ) -> Self {
        Self {
            config,
            camera,
            detector,
            translator,
            exit_port,
            session: Session::new(),
        }
    }

    // @method: Create a controller wired to the real remote services
    pub fn with_config(config: Config, camera: Arc<dyn Camera>) -> Result<Self> {
        let detector = Arc::new(GoogleVision::new(
            &config.api_key,
            &config.vision.endpoint,
            config.vision.timeout_secs,
        ));
        let translator = Arc::new(GoogleTranslate::new(
            &config.api_key,
            &config.translation.endpoint,
            config.translation.timeout_secs,
        ));

        Ok(Self::new(
            config,
            camera,
            detector,
            translator,
            Box::new(ProcessExit),
        ))
    }

    /// Current session state for the presentation layer
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> &Phase {
        self.session.phase()
    }

    pub fn busy(&self) -> bool {
        self.session.busy()
    }

    /// Shutter pressed. Captures a photo and runs one detection call.
    ///
    /// Ignored while an operation is in flight or while a result is still on
    /// screen; allowed again from the failed phase so the user can retry.
    /// A capture failure returns the session to idle with the busy flag
    /// cleared and nothing shown; detection outcomes land in the detected,
    /// unsupported, or failed phase.
    pub async fn capture_requested(&mut self) {
        if self.session.busy() {
            debug!("Shutter ignored, an operation is already in flight");
            return;
        }
        if !matches!(self.session.phase(), Phase::Idle | Phase::Failed { .. }) {
            debug!("Shutter ignored in phase {}", self.session.phase().name());
            return;
        }

        let epoch = self.session.epoch();
        self.session.begin(Phase::Capturing);

        let options = self.config.capture.options();
        let image = match self.camera.capture(&options).await {
            Ok(image) => image,
            Err(e) => {
                error!("{}", WorkflowError::Capture(e));
                if self.session.epoch() == epoch {
                    self.session.settle(Phase::Idle);
                }
                return;
            }
        };

        if self.session.epoch() != epoch {
            debug!("Discarding captured image for a closed session");
            return;
        }
        self.session.advance(Phase::Detecting);

        let result = self.detector.detect(&image).await;
        self.apply_detection(epoch, result);
    }

    /// Apply the outcome of a detection call.
    ///
    /// Results whose epoch no longer matches belong to a session that has
    /// been closed since the call was issued and are dropped.
    pub fn apply_detection(&mut self, epoch: u64, result: Result<Detection, ProviderError>) {
        if self.session.epoch() != epoch {
            debug!("Discarding detection result for a closed session");
            return;
        }
        if !matches!(self.session.phase(), Phase::Detecting) {
            debug!(
                "Detection result arrived in phase {}, dropping",
                self.session.phase().name()
            );
            return;
        }

        match result {
            Ok(detection) => match detection.display_language() {
                Some(name) => {
                    info!("Detected {} ({})", name, detection.locale);
                    self.session.settle(Phase::Detected { detection });
                }
                None => {
                    warn!(
                        "Detected locale {} is not in the supported set",
                        language_catalog::describe_locale(&detection.locale)
                    );
                    self.session.settle(Phase::Unsupported { detection });
                }
            },
            Err(e) => {
                let failure = WorkflowError::Detection(e);
                error!("{}", failure);
                self.session.settle(Phase::Failed {
                    stage: FailureStage::Detection,
                    detection: None,
                    message: failure.to_string(),
                });
            }
        }
    }

    /// Target language picked. Runs one translation call.
    ///
    /// The placeholder picker value and the detected locale itself are
    /// no-ops. Entering the translating phase drops any previous translation,
    /// so a stale result is never shown against a new target. Selecting the
    /// same target again re-fires the call; nothing is memoized.
    pub async fn target_language_selected(&mut self, target: &str) {
        if self.session.busy() {
            debug!("Language picker ignored, an operation is already in flight");
            return;
        }
        if target == language_catalog::TARGET_PLACEHOLDER {
            debug!("Placeholder target selected, nothing to do");
            return;
        }

        let detection = match self.session.phase() {
            Phase::Detected { detection } | Phase::Translated { detection, .. } => {
                detection.clone()
            }
            Phase::Failed {
                stage: FailureStage::Translation,
                detection: Some(detection),
                ..
            } => detection.clone(),
            other => {
                debug!("Target selection ignored in phase {}", other.name());
                return;
            }
        };

        if target == detection.locale {
            warn!(
                "Target language {} matches the detected language, ignoring",
                target
            );
            return;
        }
        if !language_catalog::is_supported(target) {
            warn!("Target language {} is not in the supported set", target);
            return;
        }

        let epoch = self.session.epoch();
        self.session.begin(Phase::Translating {
            detection: detection.clone(),
            target: target.to_string(),
        });

        let result = self
            .translator
            .translate(&detection.text, &detection.locale, target)
            .await;
        self.apply_translation(epoch, result);
    }

    /// Apply the outcome of a translation call.
    ///
    /// Stale-epoch results are dropped, same as detection. A failure keeps
    /// the detection so the user can pick another target.
    pub fn apply_translation(&mut self, epoch: u64, result: Result<String, ProviderError>) {
        if self.session.epoch() != epoch {
            debug!("Discarding translation result for a closed session");
            return;
        }

        let (detection, target) = match self.session.phase() {
            Phase::Translating { detection, target } => (detection.clone(), target.clone()),
            other => {
                debug!("Translation result arrived in phase {}, dropping", other.name());
                return;
            }
        };

        match result {
            Ok(translated_text) => {
                info!("Translated {} -> {}", detection.locale, target);
                self.session.settle(Phase::Translated {
                    detection,
                    target,
                    translated_text,
                });
            }
            Err(e) => {
                let failure = WorkflowError::Translation(e);
                error!("{}", failure);
                self.session.settle(Phase::Failed {
                    stage: FailureStage::Translation,
                    detection: Some(detection),
                    message: failure.to_string(),
                });
            }
        }
    }

    /// Close pressed. Full reset from any phase: all fields cleared, busy
    /// flag down, epoch bumped so in-flight responses get dropped.
    pub fn close_requested(&mut self) {
        debug!("Closing session from phase {}", self.session.phase().name());
        self.session.reset();
    }

    /// Exit confirmed by the user. Invokes the injected process-exit
    /// capability; the Cancel/Yes prompt happens in the presentation layer
    /// before this is called.
    pub fn exit_confirmed(&self) {
        info!("Exit confirmed");
        self.exit_port.exit();
    }
}
