//! Shortcut record store.
//!
//! An ordered table of editable shortcut rows. Every row keeps a stable
//! [`RowId`] for its whole life, independent of sorting and removal.

use super::validator::ValidationResult;
use crate::keyboard::icons::Icon;
use crate::keyboard::profile::{parameters_text, ActionId, Parameters, UNSET_ACTION};
use crate::keyboard::{ActionDefinition, KeyShortcut};

/// Stable identity of a row inside its store.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

/// Validation status of a row, ordered by severity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ShortcutStatus {
    #[default]
    Normal,
    Warning,
    Error,
}

/// One editable (action, parameters, shortcut) binding.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutRow {
    id: RowId,
    pub action: ActionId,
    pub text: String,
    pub name: String,
    pub icon: Option<String>,
    pub parameters: Parameters,
    pub shortcut: KeyShortcut,
    pub is_disabled: bool,
    pub status: ShortcutStatus,
    pub message: String,
    pub status_icon: Option<Icon>,
}

impl ShortcutRow {
    /// A row bound to no action and no shortcut.
    ///
    pub fn blank(is_disabled: bool) -> Self {
        ShortcutRow {
            id: RowId(0),
            action: UNSET_ACTION,
            text: String::new(),
            name: String::new(),
            icon: None,
            parameters: Parameters::new(),
            shortcut: KeyShortcut::empty(),
            is_disabled,
            status: ShortcutStatus::Normal,
            message: String::new(),
            status_icon: None,
        }
    }

    pub fn with_action(mut self, definition: &ActionDefinition) -> Self {
        self.bind_action(definition);
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_shortcut(mut self, shortcut: KeyShortcut) -> Self {
        self.shortcut = shortcut;
        self
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// Tooltip of the action cell, `text (name)`.
    ///
    pub fn tool_tip(&self) -> String {
        if self.name.is_empty() {
            return self.text.clone();
        }
        format!("{} ({})", self.text, self.name)
    }

    pub fn parameters_text(&self) -> String {
        parameters_text(&self.parameters)
    }

    /// Record the outcome of a validation run on this row.
    ///
    pub fn apply_validation(&mut self, result: &ValidationResult) {
        self.status = result.status();
        self.message = result.message.clone();
        self.status_icon = result.icon.clone();
    }

    fn bind_action(&mut self, definition: &ActionDefinition) {
        self.action = definition.identifier;
        self.text = definition.text.clone();
        self.name = definition.name.clone();
        self.icon = definition.icon.clone();
    }
}

/// Ordered, editable table of shortcut rows.
///
#[derive(Debug, Clone, Default)]
pub struct ShortcutRecordStore {
    rows: Vec<ShortcutRow>,
    next_id: u64,
    is_modified: bool,
}

impl ShortcutRecordStore {
    pub fn new() -> Self {
        ShortcutRecordStore::default()
    }

    pub fn rows(&self) -> &[ShortcutRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: RowId) -> Option<&ShortcutRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn get_mut(&mut self, id: RowId) -> Option<&mut ShortcutRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Append a row at the end of the table, assigning its identity. Used
    /// while loading a profile, so it does not count as an edit.
    ///
    pub fn append(&mut self, mut row: ShortcutRow) -> RowId {
        row.id = self.allocate_id();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Insert an empty row right after `after`, or at the top of the table
    /// when there is no such row.
    ///
    pub fn insert_new(&mut self, after: Option<RowId>, is_disabled: bool) -> RowId {
        let mut row = ShortcutRow::blank(is_disabled);
        row.id = self.allocate_id();
        let id = row.id;
        let position = after
            .and_then(|after| self.rows.iter().position(|row| row.id == after))
            .map_or(0, |index| index + 1);
        self.rows.insert(position, row);
        self.is_modified = true;
        id
    }

    pub fn remove(&mut self, id: RowId) -> Option<ShortcutRow> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        self.is_modified = true;
        Some(self.rows.remove(index))
    }

    /// Bind a row to an action. Leaves the row untouched and returns `false`
    /// for unknown rows.
    ///
    pub fn set_action(&mut self, id: RowId, definition: &ActionDefinition) -> bool {
        match self.get_mut(id) {
            Some(row) => {
                row.bind_action(definition);
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    pub fn set_shortcut(&mut self, id: RowId, shortcut: KeyShortcut) -> bool {
        match self.get_mut(id) {
            Some(row) => {
                row.shortcut = shortcut;
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    pub fn set_status(&mut self, id: RowId, result: &ValidationResult) -> bool {
        match self.get_mut(id) {
            Some(row) => {
                row.apply_validation(result);
                true
            }
            None => false,
        }
    }

    /// Identities of the enabled rows bound to exactly `shortcut`, in table
    /// order, stopping after `limit` matches.
    ///
    pub fn find_shortcut(&self, shortcut: &KeyShortcut, limit: usize) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|row| !row.is_disabled && &row.shortcut == shortcut)
            .take(limit)
            .map(|row| row.id)
            .collect()
    }

    /// Rows whose action text or name contains `filter`, ignoring case. An
    /// empty filter matches every row.
    ///
    pub fn filter(&self, filter: &str) -> Vec<&ShortcutRow> {
        let needle = filter.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || row.text.to_lowercase().contains(&needle)
                    || row.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn sort_by_text(&mut self) {
        self.rows.sort_by(|a, b| a.text.cmp(&b.text));
    }

    /// Most severe rows first.
    ///
    pub fn sort_by_status(&mut self) {
        self.rows.sort_by(|a, b| b.status.cmp(&a.status));
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn set_modified(&mut self, is_modified: bool) {
        self.is_modified = is_modified;
    }

    pub fn mark_as_modified(&mut self) {
        self.is_modified = true;
    }

    fn allocate_id(&mut self) -> RowId {
        self.next_id += 1;
        RowId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{ActionCategory, ActionDefinition};

    fn definition(identifier: ActionId, name: &str) -> ActionDefinition {
        ActionDefinition {
            identifier,
            name: name.to_string(),
            text: name.to_string(),
            icon: None,
            category: ActionCategory::Other,
        }
    }

    fn row(name: &str, shortcut: &str, is_disabled: bool) -> ShortcutRow {
        ShortcutRow::blank(is_disabled)
            .with_action(&definition(1, name))
            .with_shortcut(shortcut.parse().unwrap())
    }

    #[test]
    fn test_append_does_not_mark_modified() {
        let mut store = ShortcutRecordStore::new();
        let first = store.append(row("NewTab", "Ctrl+T", false));
        let second = store.append(row("Reload", "F5", false));
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert!(!store.is_modified());
    }

    #[test]
    fn test_insert_new_after_row() {
        let mut store = ShortcutRecordStore::new();
        let first = store.append(row("NewTab", "Ctrl+T", false));
        store.append(row("Reload", "F5", false));

        let inserted = store.insert_new(Some(first), true);
        assert_eq!(store.rows()[1].id(), inserted);
        assert!(store.rows()[1].is_disabled);
        assert_eq!(store.rows()[1].action, UNSET_ACTION);
        assert!(store.is_modified());

        let top = store.insert_new(None, false);
        assert_eq!(store.rows()[0].id(), top);
    }

    #[test]
    fn test_remove_row() {
        let mut store = ShortcutRecordStore::new();
        let id = store.append(row("NewTab", "Ctrl+T", false));
        assert!(store.remove(id).is_some());
        assert!(store.remove(id).is_none());
        assert!(store.is_empty());
        assert!(store.is_modified());
    }

    #[test]
    fn test_find_shortcut_skips_disabled_rows_and_respects_limit() {
        let mut store = ShortcutRecordStore::new();
        store.append(row("Copy", "Ctrl+C", true));
        let first = store.append(row("Copy", "Ctrl+C", false));
        let second = store.append(row("Cut", "Ctrl+C", false));
        store.append(row("Paste", "Ctrl+C", false));

        let shortcut: KeyShortcut = "Ctrl+C".parse().unwrap();
        assert_eq!(store.find_shortcut(&shortcut, 2), vec![first, second]);
        assert_eq!(store.find_shortcut(&shortcut, 10).len(), 3);
    }

    #[test]
    fn test_filter_matches_text_and_name() {
        let mut store = ShortcutRecordStore::new();
        store.append(ShortcutRow::blank(false).with_action(&ActionDefinition {
            identifier: 3,
            name: "NewTab".to_string(),
            text: "New Tab".to_string(),
            icon: None,
            category: ActionCategory::Window,
        }));
        store.append(row("Reload", "F5", false));

        assert_eq!(store.filter("newtab").len(), 1);
        assert_eq!(store.filter("new tab").len(), 1);
        assert_eq!(store.filter("").len(), 2);
        assert!(store.filter("zoom").is_empty());
    }

    #[test]
    fn test_sorting() {
        let mut store = ShortcutRecordStore::new();
        store.append(row("Reload", "F5", false));
        let error = store.append(row("Back", "Alt+Left", false));
        store.set_status(
            error,
            &ValidationResult {
                message: "broken".to_string(),
                is_error: true,
                icon: None,
            },
        );

        store.sort_by_text();
        assert_eq!(store.rows()[0].text, "Back");

        store.sort_by_text();
        store.sort_by_status();
        assert_eq!(store.rows()[0].status, ShortcutStatus::Error);
        assert_eq!(store.rows()[0].message, "broken");
    }

    #[test]
    fn test_tool_tip() {
        let row = ShortcutRow::blank(false).with_action(&ActionDefinition {
            identifier: 3,
            name: "NewTab".to_string(),
            text: "New Tab".to_string(),
            icon: None,
            category: ActionCategory::Window,
        });
        assert_eq!(row.tool_tip(), "New Tab (NewTab)");
        assert_eq!(ShortcutRow::blank(false).tool_tip(), "");
    }
}
