//! Shortcut validation.
//!
//! Checks a candidate shortcut for a row against the rest of the table and
//! the global shortcut policy. Validation never fails: problems are reported
//! as a message with a warning or error severity.

use super::rows::{RowId, ShortcutRecordStore, ShortcutStatus};
use crate::keyboard::icons::{Icon, ERROR_ICON, WARNING_ICON};
use crate::keyboard::{ActionCategory, KeyShortcut, Services, ShortcutCheck};

/// Number of matching rows probed when looking for conflicts. The row being
/// validated counts towards the limit, so with three or more rows sharing a
/// shortcut the probe may only see the row itself and one other.
pub const CONFLICT_PROBE_LIMIT: usize = 2;

const UNKNOWN_ACTION: &str = "unknown action";

/// Outcome of validating one shortcut. An empty message means no issue.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub message: String,
    pub is_error: bool,
    pub icon: Option<Icon>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    pub fn status(&self) -> ShortcutStatus {
        if self.message.is_empty() {
            ShortcutStatus::Normal
        } else if self.is_error {
            ShortcutStatus::Error
        } else {
            ShortcutStatus::Warning
        }
    }
}

/// Validates shortcuts for a profile editor.
///
pub struct ShortcutValidator<'a> {
    services: &'a Services,
    are_single_key_shortcuts_allowed: bool,
}

impl<'a> ShortcutValidator<'a> {
    pub fn new(services: &'a Services, are_single_key_shortcuts_allowed: bool) -> Self {
        ShortcutValidator {
            services,
            are_single_key_shortcuts_allowed,
        }
    }

    pub fn services(&self) -> &'a Services {
        self.services
    }

    /// Validate `shortcut` as the shortcut of row `row`.
    ///
    /// Reports an error when another enabled row already uses the shortcut,
    /// or when a native editing hotkey would override it and the row's own
    /// action is not an editing action. Adds a warning when single key
    /// shortcuts are disabled and the shortcut is one.
    ///
    pub fn validate(&self, store: &ShortcutRecordStore, shortcut: &KeyShortcut, row: RowId) -> ValidationResult {
        if shortcut.is_empty() {
            return ValidationResult::default();
        }

        let mut result = ValidationResult::default();
        let mut messages = Vec::new();

        let mut conflicts = store.find_shortcut(shortcut, CONFLICT_PROBE_LIMIT);
        conflicts.retain(|id| *id != row);

        if let Some(conflict) = conflicts.first().and_then(|id| store.get(*id)) {
            let text = match self.services.actions.definition(conflict.action) {
                Some(definition) => definition.text.clone(),
                None => UNKNOWN_ACTION.to_string(),
            };
            messages.push(format!("This shortcut already used by {}", text));
            result.is_error = true;
        }

        if !self
            .services
            .policy
            .is_allowed(shortcut, ShortcutCheck::DisallowStandardShortcut)
        {
            let is_editing_action = store
                .get(row)
                .and_then(|row| self.services.actions.definition(row.action))
                .map_or(false, |definition| definition.category == ActionCategory::Editing);

            if !is_editing_action {
                messages.push(
                    "This shortcut cannot be used because it would be overridden by a native hotkey used by an editing action"
                        .to_string(),
                );
                result.is_error = true;
            }
        }

        if !self.are_single_key_shortcuts_allowed
            && !self
                .services
                .policy
                .is_allowed(shortcut, ShortcutCheck::DisallowSingleKeyShortcut)
        {
            messages.push("Single key shortcuts are currently disabled".to_string());
        }

        if !messages.is_empty() {
            result.message = messages.join("\n");
            result.icon = Some(self.services.icons.icon(if result.is_error {
                ERROR_ICON
            } else {
                WARNING_ICON
            }));
        }

        result
    }
}
