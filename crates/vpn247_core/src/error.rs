//! Error types for vpn247 core operations

use std::path::PathBuf;

/// Result type for all core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading configuration or localization resources
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed string table. `line` is 1-based.
    #[error("{origin}:{line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Missing resource '{key}' for locale {locale}")]
    MissingResource { key: String, locale: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(origin: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }
}
