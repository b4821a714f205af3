//! Profile assembly.
//!
//! Turns the edited rows back into profile bindings: one binding per
//! (action, parameter set) pair, with its enabled and disabled shortcuts.

use super::rows::{ShortcutRow, ShortcutStatus};
use crate::keyboard::profile::{parameters_text, ActionId, KeyboardProfile, Parameters, ProfileAction, GENERIC_CONTEXT};
use crate::keyboard::KeyShortcut;
use log::*;
use std::collections::{BTreeMap, HashMap};

/// Shortcuts collected for one parameter set of an action.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortcutsDefinition {
    pub parameters: Parameters,
    pub shortcuts: Vec<KeyShortcut>,
    pub disabled_shortcuts: Vec<KeyShortcut>,
}

/// Editable profile fields shown next to the shortcut table.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
    pub author: String,
}

impl ProfileMetadata {
    pub fn from_profile(profile: &KeyboardProfile) -> Self {
        ProfileMetadata {
            title: profile.get_title().to_string(),
            description: profile.get_description().to_string(),
            version: profile.get_version().to_string(),
            author: profile.get_author().to_string(),
        }
    }
}

/// Group rows into profile bindings.
///
/// Rows with an error status, no action or no shortcut are left out. Bindings
/// are ordered by action identifier; parameter variants of one action keep
/// the order in which they first appear.
///
pub fn assemble_definitions<'a, I>(rows: I) -> Vec<ProfileAction>
where
    I: IntoIterator<Item = &'a ShortcutRow>,
{
    let mut actions: BTreeMap<ActionId, Vec<ShortcutsDefinition>> = BTreeMap::new();
    let mut variants: HashMap<(ActionId, String), usize> = HashMap::new();

    for row in rows {
        if row.status == ShortcutStatus::Error {
            debug!("Dropping shortcut {} of action {}: {}", row.shortcut, row.action, row.message);
            continue;
        }

        if row.action < 0 || row.shortcut.is_empty() {
            continue;
        }

        let definitions = actions.entry(row.action).or_default();
        let index = *variants
            .entry((row.action, parameters_text(&row.parameters)))
            .or_insert_with(|| {
                definitions.push(ShortcutsDefinition {
                    parameters: row.parameters.clone(),
                    ..ShortcutsDefinition::default()
                });
                definitions.len() - 1
            });

        if let Some(definition) = definitions.get_mut(index) {
            if row.is_disabled {
                definition.disabled_shortcuts.push(row.shortcut.clone());
            } else {
                definition.shortcuts.push(row.shortcut.clone());
            }
        }
    }

    actions
        .into_iter()
        .flat_map(|(action, definitions)| {
            definitions.into_iter().map(move |definition| ProfileAction {
                action,
                parameters: definition.parameters,
                shortcuts: definition.shortcuts,
                disabled_shortcuts: definition.disabled_shortcuts,
            })
        })
        .collect()
}

/// Build the saved profile from `base`, the edited metadata and the rows.
///
/// The assembled bindings replace every context of `base`.
///
pub fn assemble<'a, I>(base: &KeyboardProfile, metadata: &ProfileMetadata, rows: I, is_modified: bool) -> KeyboardProfile
where
    I: IntoIterator<Item = &'a ShortcutRow>,
{
    let mut definitions = BTreeMap::new();
    definitions.insert(GENERIC_CONTEXT.to_string(), assemble_definitions(rows));

    let mut profile = base.clone();
    profile
        .set_title(&metadata.title)
        .set_description(&metadata.description)
        .set_version(&metadata.version)
        .set_author(&metadata.author)
        .set_definitions(definitions)
        .set_modified(is_modified);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::validator::ValidationResult;
    use serde_json::json;

    fn row(action: ActionId, shortcut: &str, is_disabled: bool) -> ShortcutRow {
        let mut row = ShortcutRow::blank(is_disabled).with_shortcut(shortcut.parse().unwrap());
        row.action = action;
        row
    }

    fn parameters(url: &str) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.insert("url".to_string(), json!(url));
        parameters
    }

    #[test]
    fn test_groups_by_action_in_identifier_order() {
        let rows = vec![
            row(20, "F5", false),
            row(3, "Ctrl+T", false),
            row(20, "Ctrl+R", false),
            row(3, "Ctrl+N", true),
        ];
        let definitions = assemble_definitions(&rows);

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].action, 3);
        assert_eq!(definitions[0].shortcuts, vec!["Ctrl+T".parse::<KeyShortcut>().unwrap()]);
        assert_eq!(definitions[0].disabled_shortcuts, vec!["Ctrl+N".parse::<KeyShortcut>().unwrap()]);
        assert_eq!(definitions[1].action, 20);
        assert_eq!(definitions[1].shortcuts.len(), 2);
    }

    #[test]
    fn test_parameter_variants_are_kept_apart() {
        let rows = vec![
            row(21, "Alt+Home", false).with_parameters(parameters("about:blank")),
            row(21, "Ctrl+1", false).with_parameters(parameters("https://example.org")),
            row(21, "Ctrl+Home", false).with_parameters(parameters("about:blank")),
        ];
        let definitions = assemble_definitions(&rows);

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].parameters, parameters("about:blank"));
        assert_eq!(definitions[0].shortcuts.len(), 2);
        assert_eq!(definitions[1].parameters, parameters("https://example.org"));
        assert_eq!(definitions[1].shortcuts.len(), 1);
    }

    #[test]
    fn test_skips_error_unset_and_empty_rows() {
        let mut broken = row(5, "F1", false);
        broken.apply_validation(&ValidationResult {
            message: "conflict".to_string(),
            is_error: true,
            icon: None,
        });
        let mut warned = row(6, "A", false);
        warned.apply_validation(&ValidationResult {
            message: "single key".to_string(),
            is_error: false,
            icon: None,
        });
        let rows = vec![
            broken,
            warned,
            row(-1, "Ctrl+J", false),
            row(7, "", false),
        ];
        let definitions = assemble_definitions(&rows);

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].action, 6);
    }

    #[test]
    fn test_assemble_copies_metadata_and_replaces_contexts() {
        let mut base = KeyboardProfile::new("default");
        let mut contexts = BTreeMap::new();
        contexts.insert("sidebar".to_string(), vec![ProfileAction::new(4)]);
        base.set_definitions(contexts).set_title("Old");

        let metadata = ProfileMetadata {
            title: "New".to_string(),
            description: "Edited".to_string(),
            version: "2.0".to_string(),
            author: "Me".to_string(),
        };
        let rows = vec![row(3, "Ctrl+T", false)];
        let profile = assemble(&base, &metadata, &rows, true);

        assert_eq!(profile.get_name(), "default");
        assert_eq!(ProfileMetadata::from_profile(&profile), metadata);
        assert!(profile.is_modified());
        assert_eq!(profile.get_definitions().len(), 1);
        assert_eq!(profile.get_generic_definitions().len(), 1);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let rows = vec![row(3, "Ctrl+T", false), row(3, "Ctrl+N", true), row(9, "F5", false)];
        let base = KeyboardProfile::new("default");
        let metadata = ProfileMetadata::default();
        assert_eq!(
            assemble(&base, &metadata, &rows, false),
            assemble(&base, &metadata, &rows, false)
        );
    }
}
