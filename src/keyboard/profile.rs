//! Keyboard profile model.
//!
//! A profile is a named, versioned collection of action bindings grouped by
//! context. Each binding pairs an action and a parameter set with its enabled
//! and disabled shortcuts.

use super::shortcut::KeyShortcut;
use std::collections::BTreeMap;

/// Stable integer identifier of a browser action.
pub type ActionId = i32;

/// Identifier used by rows that are not bound to any action yet.
pub const UNSET_ACTION: ActionId = -1;

/// Context holding the bindings that apply everywhere.
pub const GENERIC_CONTEXT: &str = "generic";

/// Parameters passed to an action when its shortcut is triggered.
///
/// Backed by an ordered map, so two parameter sets holding the same entries
/// always compare and serialize identically.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Compact, key-ordered JSON text of a parameter set; empty for no parameters.
///
pub fn parameters_text(parameters: &Parameters) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    serde_json::to_string(parameters).unwrap_or_default()
}

/// One persisted binding: an action, its parameters, and its shortcuts.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileAction {
    pub action: ActionId,
    pub parameters: Parameters,
    pub shortcuts: Vec<KeyShortcut>,
    pub disabled_shortcuts: Vec<KeyShortcut>,
}

impl ProfileAction {
    pub fn new(action: ActionId) -> Self {
        ProfileAction {
            action,
            ..ProfileAction::default()
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_shortcuts(mut self, shortcuts: Vec<KeyShortcut>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn with_disabled_shortcuts(mut self, shortcuts: Vec<KeyShortcut>) -> Self {
        self.disabled_shortcuts = shortcuts;
        self
    }
}

/// Named keyboard profile with its metadata and bindings.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardProfile {
    name: String,
    title: String,
    description: String,
    version: String,
    author: String,
    definitions: BTreeMap<String, Vec<ProfileAction>>,
    is_modified: bool,
}

impl KeyboardProfile {
    /// Return a new empty profile with the given name.
    ///
    pub fn new(name: &str) -> Self {
        KeyboardProfile {
            name: name.to_string(),
            ..KeyboardProfile::default()
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = description.to_string();
        self
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: &str) -> &mut Self {
        self.version = version.to_string();
        self
    }

    pub fn get_author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: &str) -> &mut Self {
        self.author = author.to_string();
        self
    }

    pub fn get_definitions(&self) -> &BTreeMap<String, Vec<ProfileAction>> {
        &self.definitions
    }

    /// Bindings of the generic context, empty when the profile has none.
    ///
    pub fn get_generic_definitions(&self) -> &[ProfileAction] {
        self.definitions
            .get(GENERIC_CONTEXT)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn set_definitions(&mut self, definitions: BTreeMap<String, Vec<ProfileAction>>) -> &mut Self {
        self.definitions = definitions;
        self
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn set_modified(&mut self, is_modified: bool) -> &mut Self {
        self.is_modified = is_modified;
        self
    }

    /// Total number of enabled and disabled shortcuts across all contexts.
    ///
    pub fn shortcut_count(&self) -> usize {
        self.definitions
            .values()
            .flatten()
            .map(|action| action.shortcuts.len() + action.disabled_shortcuts.len())
            .sum()
    }
}
