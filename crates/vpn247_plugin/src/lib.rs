//! Plugin capability contract for vpn247.
//!
//! Every selectable plugin exposes an identifier and a display label. The
//! label is resolved through a [`TextSource`] on each call so it follows the
//! current locale. "No plugin selected" is represented by [`NoPlugin`], a
//! plugin whose identifier is empty, which lets call sites handle both cases
//! through the same interface.

use std::fmt;
use std::sync::Arc;

pub use vpn247_core::TextSource;

pub mod selection;

pub use selection::PluginSelection;

/// Resource key of the "plugin disabled" label
pub const PLUGIN_DISABLED_KEY: &str = "plugin-disabled";

/// A selectable plugin
pub trait Plugin: Send + Sync + fmt::Debug {
    /// Stable identifier. Empty only for the disabled marker.
    fn id(&self) -> &str;

    /// Display label, looked up in `text` on every call
    fn label(&self, text: &dyn TextSource) -> String;

    /// True for the disabled marker, recognized by its empty identifier
    fn is_disabled(&self) -> bool {
        self.id().is_empty()
    }
}

/// The "no plugin" marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoPlugin;

/// Process-wide disabled marker
pub static NO_PLUGIN: NoPlugin = NoPlugin;

impl Plugin for NoPlugin {
    fn id(&self) -> &str {
        ""
    }

    fn label(&self, text: &dyn TextSource) -> String {
        text.get_text(PLUGIN_DISABLED_KEY)
    }
}

/// A plugin identified by `id` whose label comes from the resource `label_key`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedPlugin {
    id: String,
    label_key: String,
}

impl NamedPlugin {
    pub fn new(id: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label_key: label_key.into(),
        }
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn into_shared(self) -> Arc<dyn Plugin> {
        Arc::new(self)
    }
}

impl Plugin for NamedPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self, text: &dyn TextSource) -> String {
        text.get_text(&self.label_key)
    }
}
