/*!
 * Tests for the fixed supported-language catalog
 */

use std::collections::HashSet;

use lenslate::language_catalog::{
    SUPPORTED_LANGUAGES, TARGET_PLACEHOLDER, describe_locale, display_name, is_supported,
    selectable_targets,
};

/// Every code in the table resolves to its display name
#[test]
fn test_display_name_withSupportedCodes_shouldReturnNames() {
    assert_eq!(display_name("en"), Some("English"));
    assert_eq!(display_name("ja"), Some("Japanese"));
    assert_eq!(display_name("ko"), Some("Korean"));
    assert_eq!(display_name("zh-CN"), Some("Chinese (Simplified)"));
    assert_eq!(display_name("zh-TW"), Some("Chinese (Traditional)"));

    for entry in SUPPORTED_LANGUAGES {
        assert_eq!(display_name(entry.code), Some(entry.name));
    }
}

/// Codes outside the table return None, never a name-like value
#[test]
fn test_display_name_withUnsupportedCodes_shouldReturnNone() {
    assert_eq!(display_name("fr"), None);
    assert_eq!(display_name("de"), None);
    assert_eq!(display_name("xx"), None);
    assert_eq!(display_name(""), None);

    // Lookup is exact, not case-folded
    assert_eq!(display_name("EN"), None);
    assert_eq!(display_name("zh-cn"), None);
}

#[test]
fn test_supportedLanguages_keys_shouldBeUnique() {
    let codes: HashSet<&str> = SUPPORTED_LANGUAGES.iter().map(|e| e.code).collect();
    assert_eq!(codes.len(), SUPPORTED_LANGUAGES.len());
}

#[test]
fn test_is_supported_shouldMatchDisplayName() {
    assert!(is_supported("en"));
    assert!(is_supported("zh-TW"));
    assert!(!is_supported("fr"));
    assert!(!is_supported(TARGET_PLACEHOLDER));
}

/// Target list excludes the detected locale and keeps declared order
#[test]
fn test_selectable_targets_shouldExcludeDetectedLocale() {
    let targets = selectable_targets("en");
    assert_eq!(targets.len(), SUPPORTED_LANGUAGES.len() - 1);
    assert!(targets.iter().all(|entry| entry.code != "en"));
    assert_eq!(targets[0].code, "ja");

    // A detected locale outside the table excludes nothing
    let targets = selectable_targets("fr");
    assert_eq!(targets.len(), SUPPORTED_LANGUAGES.len());
}

#[test]
fn test_describe_locale_shouldResolveKnownIsoCodes() {
    assert_eq!(describe_locale("fr"), "French (fr)");
    assert_eq!(describe_locale("de"), "German (de)");

    // Region-tagged codes resolve through the bare prefix
    assert_eq!(describe_locale("zh-CN"), "Chinese (zh-CN)");
}

#[test]
fn test_describe_locale_withUnknownCode_shouldEchoInput() {
    assert_eq!(describe_locale("zz"), "zz");
    assert_eq!(describe_locale(""), "");
}
