//! vpn247 core library
//!
//! Application-level services shared by the other vpn247 crates: the error
//! type, TOML configuration, locale handling, the string-table based
//! localization manager and the [`AppContext`] that bundles them.

pub use config::AppConfig;
pub use context::AppContext;
pub use error::{CoreError, CoreResult};
pub use i18n::{I18nManager, StringTable, TextSource};
pub use locale::Locale;

pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod locale;
#[cfg(feature = "logging")]
pub mod logging;
