//! Global shortcut policy.

use super::shortcut::{KeyChord, KeyShortcut};
use crossterm::event::{KeyCode, KeyModifiers};

/// Named rule sets a shortcut can be checked against.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCheck {
    All,
    DisallowSingleKeyShortcut,
    DisallowStandardShortcut,
}

/// Answers whether a shortcut may be bound under a given rule set.
///
pub trait ShortcutPolicy {
    fn is_allowed(&self, shortcut: &KeyShortcut, check: ShortcutCheck) -> bool;
}

/// Policy reserving the platform editing shortcuts (copy, cut, paste, undo,
/// redo, delete, select all) and treating unmodified keys as single key
/// shortcuts.
///
#[derive(Debug, Clone)]
pub struct StandardShortcutPolicy {
    standard_shortcuts: Vec<KeyShortcut>,
}

impl StandardShortcutPolicy {
    pub fn new() -> Self {
        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;
        let standard_shortcuts = [
            // copy
            (KeyCode::Char('C'), ctrl),
            (KeyCode::Insert, ctrl),
            // cut
            (KeyCode::Char('X'), ctrl),
            (KeyCode::Delete, shift),
            // delete
            (KeyCode::Delete, KeyModifiers::empty()),
            // paste
            (KeyCode::Char('V'), ctrl),
            (KeyCode::Insert, shift),
            // redo
            (KeyCode::Char('Y'), ctrl),
            (KeyCode::Char('Z'), ctrl | shift),
            // select all
            (KeyCode::Char('A'), ctrl),
            // undo
            (KeyCode::Char('Z'), ctrl),
        ]
        .iter()
        .filter_map(|(code, modifiers)| KeyChord::new(*code, *modifiers).ok())
        .map(KeyShortcut::single)
        .collect();

        StandardShortcutPolicy { standard_shortcuts }
    }

    pub fn is_standard_shortcut(&self, shortcut: &KeyShortcut) -> bool {
        self.standard_shortcuts.contains(shortcut)
    }
}

impl Default for StandardShortcutPolicy {
    fn default() -> Self {
        StandardShortcutPolicy::new()
    }
}

/// A shortcut none of whose chords carries a modifier counts as a single
/// key shortcut. Shortcuts starting with Delete or a function key are exempt.
///
pub fn is_single_key_shortcut(shortcut: &KeyShortcut) -> bool {
    let first = match shortcut.first() {
        Some(chord) => chord,
        None => return false,
    };
    if matches!(first.code(), KeyCode::Delete | KeyCode::F(_)) {
        return false;
    }
    !shortcut.chords().iter().any(KeyChord::has_modifiers)
}

impl ShortcutPolicy for StandardShortcutPolicy {
    fn is_allowed(&self, shortcut: &KeyShortcut, check: ShortcutCheck) -> bool {
        if shortcut.is_empty() {
            return false;
        }

        if matches!(check, ShortcutCheck::All | ShortcutCheck::DisallowSingleKeyShortcut)
            && is_single_key_shortcut(shortcut)
        {
            return false;
        }

        if matches!(check, ShortcutCheck::All | ShortcutCheck::DisallowStandardShortcut)
            && self.is_standard_shortcut(shortcut)
        {
            return false;
        }

        true
    }
}
