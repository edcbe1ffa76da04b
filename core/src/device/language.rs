// ## File: `src/device/language.rs`

use crate::constants::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

/// Aliases seen in the wild, matched case-insensitively before the supported list.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("id", "in_ID"),
    ("in", "in_ID"),
    ("id_id", "in_ID"),
    ("zh", "zh_CN"),
    ("zh-cn", "zh_CN"),
    ("zh_cn", "zh_CN"),
    ("zh-tw", "zh_TW"),
    ("zh_tw", "zh_TW"),
];

/// Map any language tag onto the app's supported set; unknown input gives `en`.
pub fn normalize_language(lang: &str) -> &'static str {
    let lower = lang.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return DEFAULT_LANGUAGE;
    }

    if let Some((_, target)) = LANGUAGE_ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return *target;
    }

    SUPPORTED_LANGUAGES
        .iter()
        .find(|s| s.to_ascii_lowercase() == lower)
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE)
}
