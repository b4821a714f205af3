//! Row population from a stored profile.

use super::rows::{ShortcutRecordStore, ShortcutRow};
use super::validator::ShortcutValidator;
use crate::keyboard::profile::ProfileAction;
use crate::keyboard::{KeyShortcut, KeyboardProfile};
use log::*;

/// Fill a new store with one row per shortcut of the profile's generic
/// context, enabled shortcuts of a binding first, then its disabled ones.
///
/// Each enabled row is validated right after it is appended, against the
/// rows loaded so far. Disabled rows are never validated.
///
pub fn populate(profile: &KeyboardProfile, validator: &ShortcutValidator<'_>) -> ShortcutRecordStore {
    let mut store = ShortcutRecordStore::new();

    for definition in profile.get_generic_definitions() {
        append_shortcuts(&mut store, validator, definition, &definition.shortcuts, false);
        append_shortcuts(&mut store, validator, definition, &definition.disabled_shortcuts, true);
    }

    debug!(
        "Populated {} shortcut rows from profile {}.",
        store.len(),
        profile.get_name()
    );
    store
}

fn append_shortcuts(
    store: &mut ShortcutRecordStore,
    validator: &ShortcutValidator<'_>,
    definition: &ProfileAction,
    shortcuts: &[KeyShortcut],
    are_shortcuts_disabled: bool,
) {
    let actions = &validator.services().actions;

    for shortcut in shortcuts {
        let mut row = ShortcutRow::blank(are_shortcuts_disabled)
            .with_parameters(definition.parameters.clone())
            .with_shortcut(shortcut.clone());
        match actions.definition(definition.action) {
            Some(action) => row = row.with_action(action),
            None => {
                row.action = definition.action;
                row.name = actions.name(definition.action);
            }
        }

        let id = store.append(row);
        if are_shortcuts_disabled {
            continue;
        }

        let result = validator.validate(store, shortcut, id);
        if !result.is_empty() {
            store.set_status(id, &result);
        }
    }
}
