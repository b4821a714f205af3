//! Keyboard profile editor module.
//!
//! This module contains the editing logic behind the keyboard profile dialog:
//! - The shortcut record store (`ShortcutRecordStore`, `ShortcutRow`)
//! - Shortcut validation against the table and the global policy
//! - Population of rows from a profile and assembly of rows into a profile
//! - The `ProfileEditor` session tying them together

pub mod assembler;
pub mod population;
pub mod rows;
pub mod session;
pub mod validator;

pub use assembler::{assemble, assemble_definitions, ProfileMetadata, ShortcutsDefinition};
pub use population::populate;
pub use rows::{RowId, ShortcutRecordStore, ShortcutRow, ShortcutStatus};
pub use session::{EditHint, ProfileEditor, HINT_CLEAR_DELAY};
pub use validator::{ShortcutValidator, ValidationResult, CONFLICT_PROBE_LIMIT};
