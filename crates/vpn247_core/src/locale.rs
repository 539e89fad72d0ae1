//! Locale tags and system locale detection

use std::fmt;

/// Locale used when nothing else is known
pub const DEFAULT_LOCALE: &str = "en-US";

/// Normalized BCP-47-like locale tag such as `en-US` or `ja-JP`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Normalize a raw locale string.
    ///
    /// Accepts POSIX values (`fr_FR.UTF-8`, `de_DE@euro`), tags (`ja-jp`) and
    /// bare languages with a known primary region (`ko`). Returns `None` for
    /// anything else, including `C`, `POSIX` and empty input.
    pub fn try_parse(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw
            .trim()
            .split(['_', '-', '.', '@'])
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [lang, region, ..] if is_language(lang) && is_region(region) => Some(Self(format!(
                "{}-{}",
                lang.to_ascii_lowercase(),
                region.to_ascii_uppercase()
            ))),
            [lang, ..] => primary_region(&lang.to_ascii_lowercase()).map(|tag| Self(tag.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag (`fr` for `fr-FR`)
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Human readable name, falling back to the tag itself
    pub fn display_name(&self) -> &str {
        match self.0.as_str() {
            "en-US" => "English (United States)",
            "ja-JP" => "日本語 (日本)",
            "de-DE" => "Deutsch (Deutschland)",
            "fr-FR" => "Français (France)",
            "es-ES" => "Español (España)",
            "it-IT" => "Italiano (Italia)",
            "pt-BR" => "Português (Brasil)",
            "ru-RU" => "Русский (Россия)",
            "zh-CN" => "中文 (中国)",
            "ko-KR" => "한국어 (대한민국)",
            other => other,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_language(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn primary_region(lang: &str) -> Option<&'static str> {
    let tag = match lang {
        "en" => "en-US",
        "ja" => "ja-JP",
        "de" => "de-DE",
        "fr" => "fr-FR",
        "es" => "es-ES",
        "it" => "it-IT",
        "pt" => "pt-BR",
        "ru" => "ru-RU",
        "zh" => "zh-CN",
        "ko" => "ko-KR",
        _ => return None,
    };
    Some(tag)
}

/// Detect the process locale from `LC_ALL`, `LC_MESSAGES` and `LANG`
pub fn detect_system_locale() -> Locale {
    detect_from(|name| std::env::var(name).ok())
}

/// Same as [`detect_system_locale`] with an injectable variable lookup.
/// Empty values are skipped. An unrecognized value yields [`DEFAULT_LOCALE`].
pub fn detect_from<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| Locale::try_parse(&value))
        .unwrap_or_default()
}
