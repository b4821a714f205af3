//! Keyboard shortcut profile editing for a desktop web browser.
//!
//! The crate loads keyboard profiles into an editable table of shortcut rows,
//! validates every shortcut against the rest of the table and the global
//! shortcut policy, and assembles the edited rows back into a normalized
//! profile.

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod keyboard;
pub mod logger;
