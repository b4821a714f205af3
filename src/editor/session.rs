//! Keyboard profile editing session.
//!
//! Backs the keyboard profile dialog: it owns the shortcut table and the
//! metadata fields, re-validates rows as they are edited and produces the
//! profile to save.

use super::assembler::{assemble, ProfileMetadata};
use super::population::populate;
use super::rows::{RowId, ShortcutRecordStore, ShortcutRow};
use super::validator::{ShortcutValidator, ValidationResult};
use crate::keyboard::{ActionId, KeyShortcut, KeyboardProfile, Services};
use log::*;
use std::collections::HashMap;
use std::time::Duration;

/// How long a live edit hint stays visible.
pub const HINT_CLEAR_DELAY: Duration = Duration::from_millis(5000);

/// Transient feedback shown while a shortcut is being recorded. The host is
/// expected to clear it after `clear_after`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHint {
    pub message: String,
    pub is_error: bool,
    pub clear_after: Duration,
}

/// Editing state of one keyboard profile.
///
pub struct ProfileEditor {
    profile: KeyboardProfile,
    services: Services,
    are_single_key_shortcuts_allowed: bool,
    store: ShortcutRecordStore,
    metadata: ProfileMetadata,
    filter: String,
}

impl ProfileEditor {
    /// Open `profile_name` out of `profiles` for editing. An unknown name
    /// opens an empty profile of that name.
    ///
    pub fn new(
        profile_name: &str,
        profiles: &HashMap<String, KeyboardProfile>,
        are_single_key_shortcuts_allowed: bool,
        services: Services,
    ) -> Self {
        let profile = match profiles.get(profile_name) {
            Some(profile) => profile.clone(),
            None => {
                warn!("Keyboard profile {} not found, starting empty.", profile_name);
                KeyboardProfile::new(profile_name)
            }
        };

        let mut store = {
            let validator = ShortcutValidator::new(&services, are_single_key_shortcuts_allowed);
            populate(&profile, &validator)
        };
        store.sort_by_text();
        store.set_modified(profile.is_modified());

        ProfileEditor {
            metadata: ProfileMetadata::from_profile(&profile),
            profile,
            services,
            are_single_key_shortcuts_allowed,
            store,
            filter: String::new(),
        }
    }

    fn validator(&self) -> ShortcutValidator<'_> {
        ShortcutValidator::new(&self.services, self.are_single_key_shortcuts_allowed)
    }

    pub fn get_profile_name(&self) -> &str {
        self.profile.get_name()
    }

    pub fn are_single_key_shortcuts_allowed(&self) -> bool {
        self.are_single_key_shortcuts_allowed
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn store(&self) -> &ShortcutRecordStore {
        &self.store
    }

    pub fn rows(&self) -> &[ShortcutRow] {
        self.store.rows()
    }

    pub fn row(&self, id: RowId) -> Option<&ShortcutRow> {
        self.store.get(id)
    }

    pub fn metadata(&self) -> &ProfileMetadata {
        &self.metadata
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        if self.metadata.title != title {
            self.metadata.title = title.to_string();
            self.store.mark_as_modified();
        }
        self
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        if self.metadata.description != description {
            self.metadata.description = description.to_string();
            self.store.mark_as_modified();
        }
        self
    }

    pub fn set_version(&mut self, version: &str) -> &mut Self {
        if self.metadata.version != version {
            self.metadata.version = version.to_string();
            self.store.mark_as_modified();
        }
        self
    }

    pub fn set_author(&mut self, author: &str) -> &mut Self {
        if self.metadata.author != author {
            self.metadata.author = author.to_string();
            self.store.mark_as_modified();
        }
        self
    }

    pub fn get_filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: &str) -> &mut Self {
        self.filter = filter.to_string();
        self
    }

    /// Rows matching the current filter, in table order.
    ///
    pub fn visible_rows(&self) -> Vec<&ShortcutRow> {
        self.store.filter(&self.filter)
    }

    pub fn sort_by_text(&mut self) {
        self.store.sort_by_text();
    }

    pub fn sort_by_status(&mut self) {
        self.store.sort_by_status();
    }

    /// Add an empty row after `after` (or at the top) and return its id.
    ///
    pub fn add_shortcut(&mut self, after: Option<RowId>, is_disabled: bool) -> RowId {
        self.store.insert_new(after, is_disabled)
    }

    pub fn remove_shortcut(&mut self, id: RowId) -> Option<ShortcutRow> {
        self.store.remove(id)
    }

    /// Bind a row to another action. Identifiers below one and unknown
    /// actions are ignored.
    ///
    pub fn set_action(&mut self, id: RowId, action: ActionId) -> bool {
        if action <= 0 {
            return false;
        }
        match self.services.actions.definition(action) {
            Some(definition) => self.store.set_action(id, definition),
            None => {
                debug!("Ignoring unknown action {} for row {:?}.", action, id);
                false
            }
        }
    }

    /// Validate `shortcut` as the shortcut of row `id` without changing
    /// anything.
    ///
    pub fn validate(&self, shortcut: &KeyShortcut, id: RowId) -> ValidationResult {
        self.validator().validate(&self.store, shortcut, id)
    }

    /// Feedback for a shortcut that is still being recorded. Nothing is
    /// reported for empty shortcuts or disabled rows.
    ///
    pub fn preview_shortcut(&self, id: RowId, shortcut: &KeyShortcut) -> Option<EditHint> {
        let row = self.store.get(id)?;
        if shortcut.is_empty() || row.is_disabled {
            return None;
        }

        let result = self.validate(shortcut, id);
        if result.is_empty() {
            return None;
        }

        Some(EditHint {
            message: result.message,
            is_error: result.is_error,
            clear_after: HINT_CLEAR_DELAY,
        })
    }

    /// Store the recorded shortcut in row `id`. Enabled rows are validated
    /// again and their status updated; disabled rows keep their status.
    ///
    pub fn commit_shortcut(&mut self, id: RowId, shortcut: KeyShortcut) -> Option<ValidationResult> {
        let is_disabled = self.store.get(id)?.is_disabled;
        self.store.set_shortcut(id, shortcut.clone());
        if is_disabled {
            return None;
        }

        let result = self.validate(&shortcut, id);
        self.store.set_status(id, &result);
        Some(result)
    }

    pub fn is_modified(&self) -> bool {
        self.store.is_modified()
    }

    /// The profile to save: the original profile with the edited metadata
    /// and the bindings assembled from the table.
    ///
    pub fn profile(&self) -> KeyboardProfile {
        assemble(
            &self.profile,
            &self.metadata,
            self.store.rows(),
            self.store.is_modified(),
        )
    }
}
