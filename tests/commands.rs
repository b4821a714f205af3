//! Command runner behavior against a profiles directory on disk.

use shortcut_profiles::app::{App, Command};
use shortcut_profiles::config::Config;
use shortcut_profiles::error::AppError;
use shortcut_profiles::keyboard::{BuiltinActions, ProfileStore};
use std::fs;
use std::path::PathBuf;

const CONFLICTING_PROFILE: &str = r#"{
    "title": "Conflicting",
    "author": "Tester",
    "contexts": {
        "generic": [
            {"action": "Reload", "shortcuts": ["F5"]},
            {"action": "Stop", "shortcuts": ["F5", "Esc"]},
            {"action": "NewTab", "shortcuts": ["T"]}
        ]
    }
}"#;

fn setup() -> (PathBuf, App) {
    let directory = std::env::temp_dir().join(format!("shortcut-profiles-cli-{}", uuid::Uuid::new_v4()));
    let profiles = directory.join("keyboard");
    fs::create_dir_all(&profiles).unwrap();
    fs::write(profiles.join("conflicting.json"), CONFLICTING_PROFILE).unwrap();

    let mut config = Config::new();
    config.load(directory.to_str()).unwrap();
    config.default_profile = "conflicting".to_string();
    (directory, App::new(config).unwrap())
}

fn run(app: &App, command: Command) -> (bool, String) {
    let mut out = Vec::new();
    let ok = app.run(command, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn list_shows_every_profile() {
    let (directory, app) = setup();
    let (ok, output) = run(&app, Command::List);
    assert!(ok);
    assert!(output.contains("conflicting"));
    assert!(output.contains("Conflicting"));
    assert!(output.contains("4 shortcuts"));
    fs::remove_dir_all(directory).unwrap();
}

#[test]
fn check_reports_conflicts() {
    let (directory, app) = setup();
    let (ok, output) = run(&app, Command::Check { profile: None });
    assert!(!ok);
    assert!(output.contains("This shortcut already used by Reload"));
    assert!(output.contains("Single key shortcuts are currently disabled"));
    assert!(output.contains("conflicting: 4 shortcuts, 1 conflicting"));
    fs::remove_dir_all(directory).unwrap();
}

#[test]
fn normalize_drops_conflicts_and_saves() {
    let (directory, app) = setup();
    let (ok, output) = run(
        &app,
        Command::Normalize {
            profile: Some("conflicting".to_string()),
        },
    );
    assert!(ok);
    assert!(output.contains("3 shortcuts, 1 dropped"));

    let store = ProfileStore::new(directory.join("keyboard"));
    let profile = store.load("conflicting", &BuiltinActions::new()).unwrap();
    assert_eq!(profile.get_author(), "Tester");
    assert_eq!(profile.shortcut_count(), 3);

    let (ok, _) = run(&app, Command::Check { profile: None });
    assert!(ok);
    fs::remove_dir_all(directory).unwrap();
}

#[test]
fn unknown_profile_is_an_error() {
    let (directory, app) = setup();
    let mut out = Vec::new();
    let result = app.run(
        Command::Check {
            profile: Some("missing".to_string()),
        },
        &mut out,
    );
    assert!(matches!(result, Err(AppError::Profile(_))));
    fs::remove_dir_all(directory).unwrap();
}

#[test]
fn broken_sibling_profile_does_not_block_others() {
    let (directory, app) = setup();
    fs::write(directory.join("keyboard").join("broken.json"), "{ \"contexts\": [").unwrap();

    let (ok, output) = run(&app, Command::List);
    assert!(ok);
    assert!(output.contains("conflicting"));
    assert!(!output.contains("broken"));

    let (ok, output) = run(&app, Command::Check { profile: None });
    assert!(!ok);
    assert!(output.contains("conflicting: 4 shortcuts, 1 conflicting"));
    fs::remove_dir_all(directory).unwrap();
}
