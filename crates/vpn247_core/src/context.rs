//! Application context passed to anything that needs localized text

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::i18n::{I18nManager, TextSource};
use crate::locale::{self, Locale};

/// Configuration plus the services built from it
#[derive(Debug)]
pub struct AppContext {
    config: AppConfig,
    i18n: I18nManager,
}

impl AppContext {
    /// Build the context from `config`.
    ///
    /// An explicitly configured locale that cannot be loaded is an error. A
    /// detected one is only logged and the fallback locale stays current.
    pub fn from_config(config: AppConfig) -> CoreResult<Self> {
        let fallback = Locale::try_parse(&config.fallback_locale)
            .ok_or_else(|| CoreError::UnsupportedLocale(config.fallback_locale.clone()))?;
        let i18n = I18nManager::new(fallback, config.locale_dir.clone())?;

        match config.locale.as_deref() {
            Some(tag) => {
                i18n.set_locale(tag)?;
            }
            None => {
                let detected = locale::detect_system_locale();
                if let Err(e) = i18n.set_locale(detected.as_str()) {
                    warn!("Ignoring system locale {}: {}", detected, e);
                }
            }
        }

        debug!("Application context ready (locale {})", i18n.current_locale());
        Ok(Self { config, i18n })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn i18n(&self) -> &I18nManager {
        &self.i18n
    }

    /// Switch the current locale
    pub fn set_locale(&self, tag: &str) -> CoreResult<Locale> {
        self.i18n.set_locale(tag)
    }

    pub fn current_locale(&self) -> Locale {
        self.i18n.current_locale()
    }
}

impl TextSource for AppContext {
    fn get_text(&self, key: &str) -> String {
        self.i18n.get_text(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_locale(tag: &str) -> AppConfig {
        AppConfig {
            locale: Some(tag.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_context_uses_configured_locale() -> CoreResult<()> {
        let ctx = AppContext::from_config(config_with_locale("de_DE.UTF-8"))?;
        assert_eq!(ctx.current_locale().as_str(), "de-DE");
        assert_eq!(ctx.get_text("plugin-disabled"), "Deaktiviert");
        Ok(())
    }

    #[test]
    fn test_context_rejects_unknown_configured_locale() {
        let result = AppContext::from_config(config_with_locale("ru-RU"));
        assert!(matches!(result, Err(CoreError::UnsupportedLocale(_))));
    }

    #[test]
    fn test_context_rejects_unrecognized_language() {
        for tag in ["nl", "klingon"] {
            let result = AppContext::from_config(config_with_locale(tag));
            assert!(
                matches!(result, Err(CoreError::UnsupportedLocale(ref raw)) if raw == tag),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn test_context_rejects_unrecognized_fallback() {
        let result = AppContext::from_config(AppConfig {
            fallback_locale: "xx".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(CoreError::UnsupportedLocale(ref raw)) if raw == "xx"));
    }

    #[test]
    fn test_context_locale_switch() -> CoreResult<()> {
        let ctx = AppContext::from_config(config_with_locale("en-US"))?;
        assert_eq!(ctx.get_text("plugin-disabled"), "Disabled");

        ctx.set_locale("fr")?;
        assert_eq!(ctx.get_text("plugin-disabled"), "Désactivé");
        assert_eq!(ctx.config().log_level, "info");
        Ok(())
    }
}
