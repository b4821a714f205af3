//! Keyboard profile specific error types.

use std::path::PathBuf;

/// Errors that can occur while parsing shortcuts or reading and writing
/// profile files.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Shortcut text could not be parsed
    #[error("Invalid shortcut '{text}': {reason}")]
    InvalidShortcut { text: String, reason: String },

    /// No profile with the given name exists
    #[error("Profile not found: {name}")]
    ProfileNotFound { name: String },

    /// Failed to read a profile file
    #[error("Failed to load profile from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write a profile file
    #[error("Failed to save profile to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to list the profiles directory
    #[error("Failed to read profiles directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a profile
    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize a profile
    #[error("Failed to deserialize profile: {0}")]
    DeserializationFailed(String),
}
