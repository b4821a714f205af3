//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! where keyboard profiles live, which profile to open by default, whether
//! single key shortcuts are allowed, and how verbose logging is.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/shortcut-profiles";
const PROFILES_DIRECTORY_NAME: &str = "keyboard";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub profiles_directory: Option<PathBuf>,
    pub default_profile: String,
    pub single_key_shortcuts_allowed: bool,
    pub log_level: String,
    directory: Option<PathBuf>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles_directory: Option<PathBuf>,
    #[serde(default = "default_profile_name")]
    pub default_profile: String,
    #[serde(default)]
    pub single_key_shortcuts_allowed: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_profile_name() -> String {
    "default".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the default settings.
    ///
    pub fn new() -> Config {
        Config {
            profiles_directory: None,
            default_profile: default_profile_name(),
            single_key_shortcuts_allowed: false,
            log_level: default_log_level(),
            directory: None,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        self.directory = Some(dir_path);
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.profiles_directory = data.profiles_directory;
            self.default_profile = data.default_profile;
            self.single_key_shortcuts_allowed = data.single_key_shortcuts_allowed;
            self.log_level = data.log_level;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            profiles_directory: self.profiles_directory.clone(),
            default_profile: self.default_profile.clone(),
            single_key_shortcuts_allowed: self.single_key_shortcuts_allowed,
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Directory holding the keyboard profiles: the configured one, or the
    /// `keyboard` directory next to the configuration file.
    ///
    pub fn profiles_directory(&self) -> Result<PathBuf, AppError> {
        if let Some(directory) = &self.profiles_directory {
            return Ok(directory.clone());
        }
        match &self.directory {
            Some(directory) => Ok(directory.join(PROFILES_DIRECTORY_NAME)),
            None => Ok(Config::default_path()?.join(PROFILES_DIRECTORY_NAME)),
        }
    }

    /// Parsed log level, rejecting unknown level names.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, AppError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()).into())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
