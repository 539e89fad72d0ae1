//! The active plugin choice

use std::sync::Arc;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::{NoPlugin, Plugin, TextSource, NO_PLUGIN};

/// Handle returned by [`PluginSelection::shared`] for `Disabled`
static SHARED_NO_PLUGIN: Lazy<Arc<dyn Plugin>> = Lazy::new(|| Arc::new(NoPlugin));

/// Either no plugin or a selected one
#[derive(Debug, Clone, Default)]
pub enum PluginSelection {
    #[default]
    Disabled,
    Selected(Arc<dyn Plugin>),
}

impl PluginSelection {
    /// Wrap `plugin`. A plugin with an empty identifier collapses to
    /// [`PluginSelection::Disabled`].
    pub fn from_plugin(plugin: Arc<dyn Plugin>) -> Self {
        if plugin.is_disabled() {
            debug!("Plugin with empty id selected, treating as disabled");
            Self::Disabled
        } else {
            Self::Selected(plugin)
        }
    }

    /// The selected plugin, or the disabled marker
    pub fn plugin(&self) -> &dyn Plugin {
        match self {
            Self::Disabled => &NO_PLUGIN,
            Self::Selected(plugin) => plugin.as_ref(),
        }
    }

    /// Owned handle to [`PluginSelection::plugin`], for callers that keep the
    /// plugin beyond the selection's lifetime. `Disabled` always returns the
    /// same shared marker.
    pub fn shared(&self) -> Arc<dyn Plugin> {
        match self {
            Self::Disabled => Arc::clone(&*SHARED_NO_PLUGIN),
            Self::Selected(plugin) => Arc::clone(plugin),
        }
    }

    /// Identifier of the selected plugin, empty when disabled
    pub fn id(&self) -> &str {
        self.plugin().id()
    }

    pub fn label(&self, text: &dyn TextSource) -> String {
        self.plugin().label(text)
    }

    pub fn is_disabled(&self) -> bool {
        self.plugin().is_disabled()
    }
}

impl From<Arc<dyn Plugin>> for PluginSelection {
    fn from(plugin: Arc<dyn Plugin>) -> Self {
        Self::from_plugin(plugin)
    }
}

impl PartialEq for PluginSelection {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for PluginSelection {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NamedPlugin, PLUGIN_DISABLED_KEY};

    struct EchoText;

    impl TextSource for EchoText {
        fn get_text(&self, key: &str) -> String {
            format!("<{key}>")
        }
    }

    #[test]
    fn test_default_is_disabled() {
        let selection = PluginSelection::default();
        assert!(selection.is_disabled());
        assert_eq!(selection.id(), "");
        assert_eq!(selection.label(&EchoText), format!("<{PLUGIN_DISABLED_KEY}>"));
    }

    #[test]
    fn test_empty_id_collapses_to_disabled() {
        let selection = PluginSelection::from_plugin(Arc::new(NamedPlugin::new("", "whatever")));
        assert!(matches!(selection, PluginSelection::Disabled));
        assert_eq!(selection.label(&EchoText), "<plugin-disabled>");

        let selection: PluginSelection = (Arc::new(NoPlugin) as Arc<dyn Plugin>).into();
        assert_eq!(selection, PluginSelection::Disabled);
    }

    #[test]
    fn test_selected_plugin_delegates() {
        let selection = PluginSelection::from_plugin(NamedPlugin::new("obfs-local", "plugin-obfs").into_shared());
        assert!(!selection.is_disabled());
        assert_eq!(selection.id(), "obfs-local");
        assert_eq!(selection.label(&EchoText), "<plugin-obfs>");
        assert_ne!(selection, PluginSelection::Disabled);
    }

    #[test]
    fn test_shared_disabled_marker_is_singleton() {
        let a = PluginSelection::Disabled.shared();
        let b = PluginSelection::default().shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.id(), "");
    }
}
