//! Keyboard profile domain module.
//!
//! This module contains the building blocks shared by the profile editor:
//! - Key chords and shortcuts with their portable text form
//! - The keyboard profile model and its on-disk JSON format
//! - The collaborators the editor consults (actions, shortcut policy, icons)

pub mod actions;
mod error;
pub mod icons;
pub mod policy;
pub mod profile;
pub mod shortcut;
pub mod storage;

pub use actions::{ActionCategory, ActionDefinition, ActionRegistry, BuiltinActions};
pub use error::ProfileError;
pub use icons::{Icon, IconProvider, ThemeIcons};
pub use policy::{ShortcutCheck, ShortcutPolicy, StandardShortcutPolicy};
pub use profile::{ActionId, KeyboardProfile, Parameters, ProfileAction, GENERIC_CONTEXT, UNSET_ACTION};
pub use shortcut::{KeyChord, KeyShortcut};
pub use storage::ProfileStore;

/// Collaborators injected into the profile editor.
///
pub struct Services {
    pub actions: Box<dyn ActionRegistry>,
    pub policy: Box<dyn ShortcutPolicy>,
    pub icons: Box<dyn IconProvider>,
}

impl Services {
    pub fn new(
        actions: Box<dyn ActionRegistry>,
        policy: Box<dyn ShortcutPolicy>,
        icons: Box<dyn IconProvider>,
    ) -> Self {
        Services {
            actions,
            policy,
            icons,
        }
    }
}

impl Default for Services {
    /// Built-in actions, the standard shortcut policy and the default theme.
    ///
    fn default() -> Self {
        Services::new(
            Box::new(BuiltinActions::new()),
            Box::new(StandardShortcutPolicy::new()),
            Box::new(ThemeIcons::default()),
        )
    }
}
