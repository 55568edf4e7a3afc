use isolang::Language;

/// Language catalog for the capture-detect-translate workflow
///
/// The set of languages the application can display and offer as translation
/// targets is a fixed table, not everything the detection service can tag.
/// Lookups return `None` for codes outside the table so callers can never
/// confuse a valid display name with the "not found" case.
/// A supported language: locale code plus human-readable display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Locale code as the detection service tags it (e.g. "en", "zh-CN")
    pub code: &'static str,
    /// Display name shown in the UI
    pub name: &'static str,
}

/// The fixed supported-language table. Keys are unique and declaration
/// order is the order the picker presents them in.
pub const SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "en", name: "English" },
    LanguageEntry { code: "ja", name: "Japanese" },
    LanguageEntry { code: "ko", name: "Korean" },
    LanguageEntry { code: "zh-CN", name: "Chinese (Simplified)" },
    LanguageEntry { code: "zh-TW", name: "Chinese (Traditional)" },
    LanguageEntry { code: "id", name: "Indonesian" },
];

/// Disabled placeholder value for the target-language picker.
/// Selecting it must never trigger a translation.
pub const TARGET_PLACEHOLDER: &str = "0";

/// Look up the display name for a locale code.
/// Linear scan, first match wins; `None` for codes outside the table.
pub fn display_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.name)
}

/// Whether a locale code is in the supported table
pub fn is_supported(code: &str) -> bool {
    display_name(code).is_some()
}

/// Languages offered as translation targets for a given detected locale.
/// The detected locale itself is excluded.
pub fn selectable_targets(detected: &str) -> Vec<&'static LanguageEntry> {
    SUPPORTED_LANGUAGES
        .iter()
        .filter(|entry| entry.code != detected)
        .collect()
}

/// Describe a locale code for diagnostics, resolving the bare ISO 639-1
/// prefix through isolang when possible. Codes the detection service emits
/// are not limited to the supported table, so this works for any input.
pub fn describe_locale(code: &str) -> String {
    let bare = code.split(['-', '_']).next().unwrap_or(code);
    match Language::from_639_1(&bare.to_lowercase()) {
        Some(lang) => format!("{} ({})", lang.to_name(), code),
        None => code.to_string(),
    }
}
