//! Keyboard profile files.
//!
//! Every profile lives in its own `<name>.json` file inside the profiles
//! directory. Actions are written by their stable name so files survive
//! changes to action identifiers.

use super::actions::ActionRegistry;
use super::profile::{KeyboardProfile, Parameters, ProfileAction};
use super::shortcut::KeyShortcut;
use super::ProfileError;
use log::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_EXTENSION: &str = "json";

/// Define specification for a profile file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    contexts: BTreeMap<String, Vec<ActionSpec>>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionSpec {
    action: String,
    #[serde(default, skip_serializing_if = "Parameters::is_empty")]
    parameters: Parameters,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    shortcuts: Vec<StoredShortcut>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    disabled_shortcuts: Vec<StoredShortcut>,
}

/// A shortcut as found in a profile file. Text that does not parse is kept
/// with its error so one bad entry does not reject the whole file.
///
enum StoredShortcut {
    Valid(KeyShortcut),
    Invalid { text: String, error: ProfileError },
}

impl From<&KeyShortcut> for StoredShortcut {
    fn from(shortcut: &KeyShortcut) -> Self {
        StoredShortcut::Valid(shortcut.clone())
    }
}

impl Serialize for StoredShortcut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StoredShortcut::Valid(shortcut) => shortcut.serialize(serializer),
            StoredShortcut::Invalid { text, .. } => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for StoredShortcut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(match text.parse::<KeyShortcut>() {
            Ok(shortcut) => StoredShortcut::Valid(shortcut),
            Err(error) => StoredShortcut::Invalid { text, error },
        })
    }
}

/// Reads and writes keyboard profiles in a directory.
///
#[derive(Debug, Clone)]
pub struct ProfileStore {
    directory: PathBuf,
}

impl ProfileStore {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        ProfileStore {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.{}", name, FILE_EXTENSION))
    }

    /// Load every profile in the directory keyed by file stem. A missing
    /// directory holds no profiles. Files that cannot be read or parsed are
    /// skipped with a warning.
    ///
    pub fn load_all(
        &self,
        actions: &dyn ActionRegistry,
    ) -> Result<HashMap<String, KeyboardProfile>, ProfileError> {
        let mut profiles = HashMap::new();
        if !self.directory.exists() {
            debug!(
                "Profiles directory {} does not exist yet.",
                self.directory.display()
            );
            return Ok(profiles);
        }

        let entries =
            fs::read_dir(&self.directory).map_err(|e| ProfileError::DirectoryUnreadable {
                path: self.directory.clone(),
                source: e,
            })?;
        for entry in entries {
            let path = entry
                .map_err(|e| ProfileError::DirectoryUnreadable {
                    path: self.directory.clone(),
                    source: e,
                })?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            match self.read(&name, &path, actions) {
                Ok(profile) => {
                    profiles.insert(name, profile);
                }
                Err(e) => warn!("Skipping keyboard profile {}: {}", path.display(), e),
            }
        }

        info!(
            "Loaded {} keyboard profiles from {}.",
            profiles.len(),
            self.directory.display()
        );
        Ok(profiles)
    }

    /// Load a single profile by name.
    ///
    pub fn load(
        &self,
        name: &str,
        actions: &dyn ActionRegistry,
    ) -> Result<KeyboardProfile, ProfileError> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(ProfileError::ProfileNotFound {
                name: name.to_string(),
            });
        }
        self.read(name, &path, actions)
    }

    /// Serialize the profile and write it to `<name>.json`, creating the
    /// directory when needed.
    ///
    pub fn save(
        &self,
        profile: &KeyboardProfile,
        actions: &dyn ActionRegistry,
    ) -> Result<PathBuf, ProfileError> {
        let path = self.path_for(profile.get_name());
        let content = to_json(profile, actions)?;

        if !self.directory.exists() {
            fs::create_dir_all(&self.directory).map_err(|e| ProfileError::SaveFailed {
                path: self.directory.clone(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(&path).map_err(|e| ProfileError::SaveFailed {
            path: path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ProfileError::SaveFailed {
            path: path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ProfileError::SaveFailed {
            path: path.clone(),
            source: e,
        })?;

        info!("Saved keyboard profile {} to {}.", profile.get_name(), path.display());
        Ok(path)
    }

    fn read(
        &self,
        name: &str,
        path: &Path,
        actions: &dyn ActionRegistry,
    ) -> Result<KeyboardProfile, ProfileError> {
        let contents = fs::read_to_string(path).map_err(|e| ProfileError::LoadFailed {
            path: path.to_path_buf(),
            message: format!("IO error: {}", e),
        })?;
        let mut profile = from_json(&contents, actions)?;
        profile.set_name(name);
        Ok(profile)
    }
}

/// Parse profile file contents. Unknown actions and unparsable shortcuts are
/// skipped with a warning rather than failing the whole profile.
///
pub fn from_json(contents: &str, actions: &dyn ActionRegistry) -> Result<KeyboardProfile, ProfileError> {
    let data: FileSpec = serde_json::from_str(contents)
        .map_err(|e| ProfileError::DeserializationFailed(e.to_string()))?;

    let mut definitions = BTreeMap::new();
    for (context, specs) in data.contexts {
        let mut context_actions = Vec::with_capacity(specs.len());
        for spec in specs {
            let identifier = match actions.identifier(&spec.action) {
                Some(identifier) => identifier,
                None => {
                    warn!("Skipping unknown action '{}' in context {}.", spec.action, context);
                    continue;
                }
            };
            context_actions.push(
                ProfileAction::new(identifier)
                    .with_parameters(spec.parameters)
                    .with_shortcuts(valid_shortcuts(&spec.action, spec.shortcuts))
                    .with_disabled_shortcuts(valid_shortcuts(&spec.action, spec.disabled_shortcuts)),
            );
        }
        definitions.insert(context, context_actions);
    }

    let mut profile = KeyboardProfile::default();
    profile
        .set_title(&data.title)
        .set_description(&data.description)
        .set_version(&data.version)
        .set_author(&data.author)
        .set_definitions(definitions);
    Ok(profile)
}

/// Render a profile as pretty printed JSON file contents.
///
pub fn to_json(profile: &KeyboardProfile, actions: &dyn ActionRegistry) -> Result<String, ProfileError> {
    let contexts = profile
        .get_definitions()
        .iter()
        .map(|(context, definitions)| {
            let specs = definitions
                .iter()
                .map(|definition| ActionSpec {
                    action: actions.name(definition.action),
                    parameters: definition.parameters.clone(),
                    shortcuts: definition.shortcuts.iter().map(StoredShortcut::from).collect(),
                    disabled_shortcuts: definition
                        .disabled_shortcuts
                        .iter()
                        .map(StoredShortcut::from)
                        .collect(),
                })
                .filter(|spec| !spec.action.is_empty())
                .collect();
            (context.clone(), specs)
        })
        .collect();

    let data = FileSpec {
        title: profile.get_title().to_string(),
        description: profile.get_description().to_string(),
        version: profile.get_version().to_string(),
        author: profile.get_author().to_string(),
        contexts,
    };
    serde_json::to_string_pretty(&data).map_err(|e| ProfileError::SerializationFailed(e.to_string()))
}

fn valid_shortcuts(action: &str, stored: Vec<StoredShortcut>) -> Vec<KeyShortcut> {
    stored
        .into_iter()
        .filter_map(|shortcut| match shortcut {
            StoredShortcut::Valid(shortcut) if !shortcut.is_empty() => Some(shortcut),
            StoredShortcut::Valid(_) => None,
            StoredShortcut::Invalid { text, error } => {
                warn!("Skipping shortcut '{}' of action {}: {}", text, action, error);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::actions::BuiltinActions;
    use crate::keyboard::profile::GENERIC_CONTEXT;

    const PROFILE: &str = r#"{
        "title": "Default",
        "version": "1.0",
        "contexts": {
            "generic": [
                {"action": "NewTab", "shortcuts": ["Ctrl+T"]},
                {"action": "Copy", "shortcuts": ["ctrl+c"], "disabledShortcuts": ["Ctrl+Ins"]},
                {"action": "Teleport", "shortcuts": ["Ctrl+J"]},
                {"action": "GoToPage", "parameters": {"url": "about:blank"}, "shortcuts": ["Ctrl+", "F6", ""]}
            ]
        }
    }"#;

    #[test]
    fn test_from_json() {
        let actions = BuiltinActions::new();
        let profile = from_json(PROFILE, &actions).unwrap();
        assert_eq!(profile.get_title(), "Default");
        assert_eq!(profile.get_version(), "1.0");
        assert_eq!(profile.get_description(), "");

        let generic = profile.get_generic_definitions();
        assert_eq!(generic.len(), 3, "unknown action is skipped");
        assert_eq!(generic[1].shortcuts[0].to_string(), "Ctrl+C");
        assert_eq!(generic[1].disabled_shortcuts[0].to_string(), "Ctrl+Ins");
        assert_eq!(generic[2].shortcuts.len(), 1, "invalid and empty shortcuts are skipped");
        assert_eq!(generic[2].parameters["url"], "about:blank");
    }

    #[test]
    fn test_from_json_rejects_malformed_files() {
        let actions = BuiltinActions::new();
        let result = from_json("{ not json", &actions);
        assert!(matches!(result, Err(ProfileError::DeserializationFailed(_))));
    }

    #[test]
    fn test_load_all_skips_malformed_files() {
        let directory = std::env::temp_dir().join(format!("shortcut-profiles-store-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&directory).unwrap();
        fs::write(directory.join("good.json"), PROFILE).unwrap();
        fs::write(directory.join("broken.json"), "{ not json").unwrap();
        fs::write(directory.join("notes.txt"), "ignored").unwrap();

        let store = ProfileStore::new(&directory);
        let actions = BuiltinActions::new();
        let profiles = store.load_all(&actions).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles["good"].get_title(), "Default");
        assert!(store.load("broken", &actions).is_err());

        fs::remove_dir_all(directory).unwrap();
    }

    #[test]
    fn test_json_round_trip() {
        let actions = BuiltinActions::new();
        let profile = from_json(PROFILE, &actions).unwrap();
        let text = to_json(&profile, &actions).unwrap();
        assert!(text.contains("\"disabledShortcuts\""));
        assert!(!text.contains("Teleport"));

        let reloaded = from_json(&text, &actions).unwrap();
        assert_eq!(
            reloaded.get_definitions().get(GENERIC_CONTEXT),
            profile.get_definitions().get(GENERIC_CONTEXT)
        );
    }
}
