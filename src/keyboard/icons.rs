//! Symbolic icon lookup.

pub const ERROR_ICON: &str = "dialog-error";
pub const WARNING_ICON: &str = "dialog-warning";

const DEFAULT_THEME: &str = "default";

/// A renderable icon, identified by theme and symbolic name.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    pub theme: String,
    pub name: String,
}

/// Maps a symbolic icon name to a renderable icon.
///
pub trait IconProvider {
    fn icon(&self, name: &str) -> Icon;
}

/// Resolves every icon inside a single named theme.
///
#[derive(Debug, Clone)]
pub struct ThemeIcons {
    theme: String,
}

impl ThemeIcons {
    pub fn new(theme: &str) -> Self {
        ThemeIcons {
            theme: theme.to_string(),
        }
    }
}

impl Default for ThemeIcons {
    fn default() -> Self {
        ThemeIcons::new(DEFAULT_THEME)
    }
}

impl IconProvider for ThemeIcons {
    fn icon(&self, name: &str) -> Icon {
        Icon {
            theme: self.theme.clone(),
            name: name.to_string(),
        }
    }
}
