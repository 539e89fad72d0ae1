//! Application configuration

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::locale::DEFAULT_LOCALE;

/// Application configuration, read from TOML. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Initial locale; detected from the environment when unset
    pub locale: Option<String>,
    pub fallback_locale: String,
    /// Directory of `<locale>.ftl` overrides
    pub locale_dir: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            fallback_locale: DEFAULT_LOCALE.to_string(),
            locale_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Read a config file. A relative `locale_dir` is resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(dir), Some(base)) = (config.locale_dir.as_ref(), path.parent()) {
            if dir.is_relative() {
                config.locale_dir = Some(base.join(dir));
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.fallback_locale, "en-US");
        assert_eq!(config.log_level, "info");
        assert!(config.locale.is_none());
        assert!(config.locale_dir.is_none());
    }

    #[test]
    fn test_config_from_toml() -> CoreResult<()> {
        let config = AppConfig::from_toml_str(
            r#"
locale = "fr-FR"
locale_dir = "/usr/share/vpn247/locales"
log_level = "debug"
"#,
        )?;
        assert_eq!(config.locale.as_deref(), Some("fr-FR"));
        assert_eq!(config.fallback_locale, "en-US");
        assert_eq!(config.locale_dir, Some(PathBuf::from("/usr/share/vpn247/locales")));
        assert_eq!(config.log_level, "debug");

        assert_eq!(AppConfig::from_toml_str("")?, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let err = AppConfig::from_toml_str("plugin = \"obfs-local\"\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(ref msg) if msg.contains("plugin")));
    }

    #[test]
    fn test_config_load_resolves_locale_dir() -> CoreResult<()> {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("vpn247.toml");
        std::fs::write(&path, "locale_dir = \"locales\"\n").expect("Failed to write config");

        let config = AppConfig::load(&path)?;
        assert_eq!(config.locale_dir, Some(dir.path().join("locales")));

        let missing = AppConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(CoreError::Io { .. })));
        Ok(())
    }
}
