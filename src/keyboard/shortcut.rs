//! Key chords and key shortcuts.
//!
//! A shortcut is an ordered sequence of up to four chords, each chord being a
//! key plus its modifiers. Shortcuts are written in portable text form, for
//! example `Ctrl+Shift+T` or `Ctrl+K, Ctrl+C`.

use super::ProfileError;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Maximum number of chords in a single shortcut.
pub const MAX_CHORDS: usize = 4;

const CHORD_SEPARATOR: &str = ", ";

/// Represents a key combination (KeyCode + modifiers).
///
/// Letters are always stored upper case and `SUPER` is folded into `META`,
/// so two chords typed differently compare equal when they render equally.
/// Only keys with a portable text name can be held, so every chord survives
/// a save and reload.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Result<Self, ProfileError> {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_uppercase()),
            other => other,
        };
        if key_name(&code).is_none() {
            return Err(invalid(&format!("{:?}", code), "key has no portable name"));
        }

        let mut modifiers = modifiers & supported_modifiers();
        if modifiers.contains(KeyModifiers::SUPER) {
            modifiers.remove(KeyModifiers::SUPER);
            modifiers.insert(KeyModifiers::META);
        }
        Ok(KeyChord { code, modifiers })
    }

    /// A chord without any modifiers.
    ///
    pub fn plain(code: KeyCode) -> Result<Self, ProfileError> {
        KeyChord::new(code, KeyModifiers::empty())
    }

    pub fn code(&self) -> KeyCode {
        self.code
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }
}

fn supported_modifiers() -> KeyModifiers {
    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT | KeyModifiers::META | KeyModifiers::SUPER
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        if self.modifiers.contains(KeyModifiers::META) {
            f.write_str("Meta+")?;
        }
        f.write_str(&key_name(&self.code).unwrap_or_default())
    }
}

impl FromStr for KeyChord {
    type Err = ProfileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(invalid(text, "empty chord"));
        }

        // `+` is both the separator and a valid key, so peel it off first.
        let (modifier_part, key_part) = if text == "+" {
            ("", "+")
        } else if let Some(stripped) = text.strip_suffix("++") {
            (stripped, "+")
        } else {
            match text.rsplit_once('+') {
                Some((modifiers, key)) => (modifiers, key),
                None => ("", text),
            }
        };

        let mut modifiers = KeyModifiers::empty();
        if !modifier_part.is_empty() {
            for token in modifier_part.split('+') {
                let modifier = parse_modifier(token.trim())
                    .ok_or_else(|| invalid(text, &format!("unknown modifier '{}'", token)))?;
                modifiers |= modifier;
            }
        }

        let code = parse_key(key_part.trim())
            .ok_or_else(|| invalid(text, &format!("unknown key '{}'", key_part)))?;

        KeyChord::new(code, modifiers)
    }
}

/// An ordered sequence of key chords bound to an action.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyShortcut {
    chords: Vec<KeyChord>,
}

impl KeyShortcut {
    /// Build a shortcut from its chords, rejecting sequences longer than
    /// [`MAX_CHORDS`].
    ///
    pub fn new(chords: Vec<KeyChord>) -> Result<Self, ProfileError> {
        if chords.len() > MAX_CHORDS {
            let text = chords
                .iter()
                .map(|chord| chord.to_string())
                .collect::<Vec<_>>()
                .join(CHORD_SEPARATOR);
            return Err(invalid(
                &text,
                &format!("at most {} chords are supported", MAX_CHORDS),
            ));
        }
        Ok(KeyShortcut { chords })
    }

    pub fn empty() -> Self {
        KeyShortcut::default()
    }

    pub fn single(chord: KeyChord) -> Self {
        KeyShortcut {
            chords: vec![chord],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn chords(&self) -> &[KeyChord] {
        &self.chords
    }

    pub fn first(&self) -> Option<&KeyChord> {
        self.chords.first()
    }
}

impl From<KeyChord> for KeyShortcut {
    fn from(chord: KeyChord) -> Self {
        KeyShortcut::single(chord)
    }
}

impl fmt::Display for KeyShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chord) in self.chords.iter().enumerate() {
            if index > 0 {
                f.write_str(CHORD_SEPARATOR)?;
            }
            write!(f, "{}", chord)?;
        }
        Ok(())
    }
}

/// Shortcuts are stored in their portable text form.
///
impl Serialize for KeyShortcut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyShortcut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for KeyShortcut {
    type Err = ProfileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(KeyShortcut::empty());
        }

        let chords = text
            .split(CHORD_SEPARATOR)
            .map(KeyChord::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        KeyShortcut::new(chords)
    }
}

fn invalid(text: &str, reason: &str) -> ProfileError {
    ProfileError::InvalidShortcut {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_modifier(token: &str) -> Option<KeyModifiers> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some(KeyModifiers::CONTROL),
        "alt" => Some(KeyModifiers::ALT),
        "shift" => Some(KeyModifiers::SHIFT),
        "meta" | "super" | "win" => Some(KeyModifiers::META),
        _ => None,
    }
}

fn parse_key(token: &str) -> Option<KeyCode> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c.to_ascii_uppercase()));
    }

    let lower = token.to_ascii_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "return" | "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "ins" | "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "menu" => KeyCode::Menu,
        "pause" => KeyCode::Pause,
        "print" | "printscreen" => KeyCode::PrintScreen,
        "capslock" => KeyCode::CapsLock,
        "scrolllock" => KeyCode::ScrollLock,
        "numlock" => KeyCode::NumLock,
        _ => {
            let number = lower.strip_prefix('f')?.parse::<u8>().ok()?;
            if (1..=35).contains(&number) {
                KeyCode::F(number)
            } else {
                return None;
            }
        }
    };
    Some(code)
}

fn key_name(code: &KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Char(' ') => "Space",
        KeyCode::Char(c) if c.is_control() || c.is_whitespace() => return None,
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::F(number) if (1..=35).contains(number) => return Some(format!("F{}", number)),
        KeyCode::Enter => "Return",
        KeyCode::Esc => "Esc",
        KeyCode::Tab => "Tab",
        KeyCode::BackTab => "Backtab",
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Del",
        KeyCode::Insert => "Ins",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PgUp",
        KeyCode::PageDown => "PgDown",
        KeyCode::Left => "Left",
        KeyCode::Right => "Right",
        KeyCode::Up => "Up",
        KeyCode::Down => "Down",
        KeyCode::Menu => "Menu",
        KeyCode::Pause => "Pause",
        KeyCode::PrintScreen => "Print",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        _ => return None,
    };
    Some(name.to_string())
}
