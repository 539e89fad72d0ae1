//! Localization support for vpn247
//!
//! Messages live in per-locale string tables. A small set of tables is
//! compiled into the binary; `<locale>.ftl` files in an optional locale
//! directory override them key by key. Lookups always read the current
//! locale at call time, so switching locales is visible to every caller
//! holding a reference to the manager.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::locale::Locale;


/// Resource key to message text for a single locale
pub type StringTable = HashMap<String, String>;

/// Text lookup used by anything that renders user-facing labels.
///
/// Implementations must be total: a key without a translation resolves to
/// some string (usually the key itself) rather than an error.
pub trait TextSource: Send + Sync {
    fn get_text(&self, key: &str) -> String;
}

const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("en-US", include_str!("../../../assets/locales/en-US.ftl")),
    ("fr-FR", include_str!("../../../assets/locales/fr-FR.ftl")),
    ("de-DE", include_str!("../../../assets/locales/de-DE.ftl")),
    ("ja-JP", include_str!("../../../assets/locales/ja-JP.ftl")),
];

/// Localization manager
pub struct I18nManager {
    /// Locale used for lookups
    current_locale: RwLock<Locale>,
    /// Consulted when the current locale lacks a key
    fallback_locale: Locale,
    /// Loaded tables by locale
    translations: RwLock<HashMap<Locale, StringTable>>,
    /// Directory of `<locale>.ftl` overrides
    locale_dir: Option<PathBuf>,
}

impl I18nManager {
    /// Create a manager with the built-in tables loaded and the current
    /// locale set to `fallback_locale`.
    ///
    /// Fails when the fallback locale has neither a built-in table nor a
    /// file in `locale_dir`.
    pub fn new(fallback_locale: Locale, locale_dir: Option<PathBuf>) -> CoreResult<Self> {
        let mut translations = HashMap::new();
        for (tag, content) in BUILTIN_TABLES {
            let locale = Locale::try_parse(tag).ok_or_else(|| CoreError::UnsupportedLocale(tag.to_string()))?;
            translations.insert(locale, parse_table(content, tag)?);
        }

        let manager = Self {
            current_locale: RwLock::new(fallback_locale.clone()),
            fallback_locale: fallback_locale.clone(),
            translations: RwLock::new(translations),
            locale_dir,
        };
        manager.load_locale(&fallback_locale)?;
        Ok(manager)
    }

    /// Manager with built-in tables only and `en-US` as fallback
    pub fn builtin() -> CoreResult<Self> {
        Self::new(Locale::default(), None)
    }

    /// Load the table for `locale`.
    ///
    /// A file in the locale directory is merged over whatever is already
    /// loaded. Without a file the locale must already have a table.
    pub fn load_locale(&self, locale: &Locale) -> CoreResult<()> {
        if let Some(path) = self.locale_file(locale) {
            if path.is_file() {
                return self.load_locale_file(locale, &path);
            }
        }

        if self.is_loaded(locale) {
            Ok(())
        } else {
            Err(CoreError::UnsupportedLocale(locale.to_string()))
        }
    }

    /// Parse `path` and merge its entries into the table for `locale`
    pub fn load_locale_file(&self, locale: &Locale, path: &Path) -> CoreResult<()> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let table = parse_table(&content, &path.display().to_string())?;
        let count = table.len();

        self.translations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(locale.clone())
            .or_default()
            .extend(table);

        debug!("Loaded {} messages for locale {} from {}", count, locale, path.display());
        Ok(())
    }

    /// Switch the current locale. Returns the normalized locale.
    ///
    /// A tag that does not normalize, or that names a locale without a
    /// table or file, is [`CoreError::UnsupportedLocale`] and leaves the
    /// current locale unchanged.
    pub fn set_locale(&self, tag: &str) -> CoreResult<Locale> {
        let locale = Locale::try_parse(tag).ok_or_else(|| CoreError::UnsupportedLocale(tag.to_string()))?;
        self.load_locale(&locale)?;

        *self
            .current_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = locale.clone();
        debug!("Set current locale to: {}", locale);
        Ok(locale)
    }

    pub fn current_locale(&self) -> Locale {
        self.current_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn fallback_locale(&self) -> &Locale {
        &self.fallback_locale
    }

    pub fn locale_dir(&self) -> Option<&Path> {
        self.locale_dir.as_deref()
    }

    /// Translated message for the current locale, or an error if neither the
    /// current nor the fallback table has `key`
    pub fn try_get_text(&self, key: &str) -> CoreResult<String> {
        let locale = self.current_locale();
        self.lookup(key, &locale)
            .ok_or_else(|| CoreError::MissingResource {
                key: key.to_string(),
                locale: locale.to_string(),
            })
    }

    /// Translated message for a specific locale, with fallback
    pub fn get_text_for(&self, key: &str, locale: &Locale) -> Option<String> {
        self.lookup(key, locale)
    }

    /// Locales with a loaded table, sorted
    pub fn loaded_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self
            .translations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        locales.sort();
        locales
    }

    /// Whether `tag` is loaded or has a file in the locale directory
    pub fn is_locale_supported(&self, tag: &str) -> bool {
        let Some(locale) = Locale::try_parse(tag) else {
            return false;
        };
        self.is_loaded(&locale) || self.locale_file(&locale).is_some_and(|p| p.is_file())
    }

    fn is_loaded(&self, locale: &Locale) -> bool {
        self.translations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(locale)
    }

    fn locale_file(&self, locale: &Locale) -> Option<PathBuf> {
        self.locale_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.ftl", locale)))
    }

    fn lookup(&self, key: &str, locale: &Locale) -> Option<String> {
        let trans = self
            .translations
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(message) = trans.get(locale).and_then(|t| t.get(key)) {
            return Some(message.clone());
        }
        if *locale != self.fallback_locale {
            if let Some(message) = trans.get(&self.fallback_locale).and_then(|t| t.get(key)) {
                return Some(message.clone());
            }
        }
        None
    }
}

impl TextSource for I18nManager {
    fn get_text(&self, key: &str) -> String {
        match self.try_get_text(key) {
            Ok(message) => message,
            Err(e) => {
                warn!("{}", e);
                key.to_string()
            }
        }
    }
}

impl std::fmt::Debug for I18nManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nManager")
            .field("current_locale", &self.current_locale())
            .field("fallback_locale", &self.fallback_locale)
            .field("loaded_locales", &self.loaded_locales())
            .field("locale_dir", &self.locale_dir)
            .finish()
    }
}

/// Check whether `key` is a valid message identifier.
///
/// Starts with a letter or `_`; continues with alphanumerics, `-`, `_` or `.`.
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Parse a `.ftl`-style string table.
///
/// `key = value` lines; `#` comments; indented lines continue the previous
/// value and are joined with a single space; a value wrapped in double
/// quotes has them stripped. A leading byte order mark is ignored.
/// `origin` names the source in errors.
pub fn parse_table(content: &str, origin: &str) -> CoreResult<StringTable> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut table = StringTable::new();
    let mut pending: Option<(String, Vec<String>)> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if line.starts_with([' ', '\t']) {
            match pending.as_mut() {
                Some((_, parts)) => parts.push(trimmed.to_string()),
                None => return Err(CoreError::parse(origin, line_no, "continuation line without a key")),
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(CoreError::parse(origin, line_no, format!("expected 'key = value', found '{}'", trimmed)));
        };
        let key = key.trim();
        if !is_valid_key(key) {
            return Err(CoreError::parse(origin, line_no, format!("invalid message key '{}'", key)));
        }

        if let Some((k, parts)) = pending.take() {
            table.insert(k, finish_value(&parts));
        }
        let value = value.trim();
        let parts = if value.is_empty() { Vec::new() } else { vec![value.to_string()] };
        pending = Some((key.to_string(), parts));
    }

    if let Some((k, parts)) = pending.take() {
        table.insert(k, finish_value(&parts));
    }
    Ok(table)
}

fn finish_value(parts: &[String]) -> String {
    let joined = parts.join(" ");
    match joined.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.to_string(),
        None => joined,
    }
}
