/*!
 * End-to-end workflow tests driving the controller through capture,
 * detection, and translation with mock collaborators
 */

use lenslate::{FailureStage, Phase};

use crate::common::controller_with;
use crate::common::mock_providers::{MockCamera, MockDetector, MockTranslator};

const PHOTO: &str = "aGVsbG8=";

#[tokio::test]
async fn test_workflow_captureAndDetect_withSupportedLocale_shouldReachDetected() {
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("你好\n世界", "zh-CN"),
        MockTranslator::echo(),
    );

    controller.capture_requested().await;

    match controller.phase() {
        Phase::Detected { detection } => {
            assert_eq!(detection.text, "你好\n世界");
            assert_eq!(detection.display_text(), "你好 世界");
            assert_eq!(detection.locale, "zh-CN");
            assert_eq!(detection.display_language(), Some("Chinese (Simplified)"));
        }
        other => panic!("Expected detected phase, got {}", other.name()),
    }
    assert!(!controller.busy());
}

#[tokio::test]
async fn test_workflow_captureAndDetect_withUnsupportedLocale_shouldReachUnsupported() {
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("bonjour", "fr"),
        MockTranslator::echo(),
    );

    controller.capture_requested().await;

    match controller.phase() {
        Phase::Unsupported { detection } => {
            assert_eq!(detection.text, "bonjour");
            assert_eq!(detection.locale, "fr");
            assert!(detection.display_language().is_none());
        }
        other => panic!("Expected unsupported phase, got {}", other.name()),
    }
    assert!(!controller.busy());

    // Close is the only way out of the unsupported phase
    controller.close_requested();
    assert_eq!(*controller.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_workflow_translate_shouldReachTranslated() {
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        MockTranslator::returning("こんにちは"),
    );

    controller.capture_requested().await;
    controller.target_language_selected("ja").await;

    assert_eq!(controller.session().detected_text(), Some("Hello"));
    assert_eq!(controller.session().detected_locale(), Some("en"));
    assert_eq!(controller.session().target_locale(), Some("ja"));
    assert_eq!(controller.session().translated_text(), Some("こんにちは"));
    assert!(!controller.busy());
}

#[tokio::test]
async fn test_workflow_detectWithNoText_shouldReachFailedAndAllowRetry() {
    let detector = MockDetector::empty();
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        detector.clone(),
        MockTranslator::echo(),
    );

    controller.capture_requested().await;

    match controller.phase() {
        Phase::Failed {
            stage, detection, ..
        } => {
            assert_eq!(*stage, FailureStage::Detection);
            assert!(detection.is_none());
        }
        other => panic!("Expected failed phase, got {}", other.name()),
    }
    assert!(!controller.busy());

    // The shutter works again from the failed phase
    controller.capture_requested().await;
    assert_eq!(detector.requests(), 2);
}

#[tokio::test]
async fn test_workflow_placeholderTarget_shouldBeIgnored() {
    let translator = MockTranslator::echo();
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        translator.clone(),
    );

    controller.capture_requested().await;
    controller.target_language_selected("0").await;

    assert!(matches!(controller.phase(), Phase::Detected { .. }));
    assert_eq!(translator.requests(), 0);
}

#[tokio::test]
async fn test_workflow_sameLanguageTarget_shouldBeIgnored() {
    let translator = MockTranslator::echo();
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        translator.clone(),
    );

    controller.capture_requested().await;
    controller.target_language_selected("en").await;

    assert!(matches!(controller.phase(), Phase::Detected { .. }));
    assert_eq!(translator.requests(), 0);
}

#[tokio::test]
async fn test_workflow_unsupportedTarget_shouldBeIgnored() {
    let translator = MockTranslator::echo();
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        translator.clone(),
    );

    controller.capture_requested().await;
    controller.target_language_selected("fr").await;

    assert!(matches!(controller.phase(), Phase::Detected { .. }));
    assert_eq!(translator.requests(), 0);
}

/// Nothing is memoized: picking another target, or the same one again,
/// re-fires the translation call
#[tokio::test]
async fn test_workflow_reselection_shouldRefireTranslation() {
    let translator = MockTranslator::echo();
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        translator.clone(),
    );

    controller.capture_requested().await;
    controller.target_language_selected("ja").await;
    assert_eq!(controller.session().translated_text(), Some("[ja] Hello"));

    controller.target_language_selected("ko").await;
    assert_eq!(controller.session().target_locale(), Some("ko"));
    assert_eq!(controller.session().translated_text(), Some("[ko] Hello"));

    controller.target_language_selected("ko").await;
    assert_eq!(translator.requests(), 3);
}

#[tokio::test]
async fn test_workflow_translationFailure_shouldKeepDetectionForRetry() {
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        MockTranslator::failing(),
    );

    controller.capture_requested().await;
    controller.target_language_selected("ja").await;

    match controller.phase() {
        Phase::Failed {
            stage, detection, ..
        } => {
            assert_eq!(*stage, FailureStage::Translation);
            assert_eq!(detection.as_ref().map(|d| d.text.as_str()), Some("Hello"));
        }
        other => panic!("Expected failed phase, got {}", other.name()),
    }
    assert!(!controller.busy());

    // The detection survived, so another target can be picked straight away
    controller.target_language_selected("ko").await;
    assert!(matches!(
        controller.phase(),
        Phase::Failed {
            stage: FailureStage::Translation,
            ..
        }
    ));
    assert_eq!(controller.session().detected_text(), Some("Hello"));
}

/// A capture failure shows nothing: silent return to idle, ready for the
/// next shutter press
#[tokio::test]
async fn test_workflow_captureDenied_shouldReturnToIdle() {
    let detector = MockDetector::returning("Hello", "en");
    let mut controller = controller_with(
        MockCamera::denied(),
        detector.clone(),
        MockTranslator::echo(),
    );

    controller.capture_requested().await;

    assert_eq!(*controller.phase(), Phase::Idle);
    assert!(!controller.busy());
    assert_eq!(detector.requests(), 0);
}

#[tokio::test]
async fn test_workflow_captureUnavailable_shouldReturnToIdle() {
    let mut controller = controller_with(
        MockCamera::unavailable(),
        MockDetector::returning("Hello", "en"),
        MockTranslator::echo(),
    );

    controller.capture_requested().await;

    assert_eq!(*controller.phase(), Phase::Idle);
    assert!(!controller.busy());
}

/// The shutter only works from idle and failed; a result on screen has to
/// be closed first
#[tokio::test]
async fn test_workflow_shutterWhileResultShown_shouldBeIgnored() {
    let camera = MockCamera::working(PHOTO);
    let mut controller = controller_with(
        camera.clone(),
        MockDetector::returning("Hello", "en"),
        MockTranslator::echo(),
    );

    controller.capture_requested().await;
    assert_eq!(camera.captures(), 1);

    controller.capture_requested().await;
    assert_eq!(camera.captures(), 1);
    assert!(matches!(controller.phase(), Phase::Detected { .. }));

    controller.close_requested();
    controller.capture_requested().await;
    assert_eq!(camera.captures(), 2);
}

#[tokio::test]
async fn test_workflow_translatedEmptyResponse_shouldReachFailed() {
    let mut controller = controller_with(
        MockCamera::working(PHOTO),
        MockDetector::returning("Hello", "en"),
        MockTranslator::empty(),
    );

    controller.capture_requested().await;
    controller.target_language_selected("ja").await;

    assert!(matches!(
        controller.phase(),
        Phase::Failed {
            stage: FailureStage::Translation,
            ..
        }
    ));
}
