use crate::config::Config;
use crate::editor::{ProfileEditor, ShortcutRow, ShortcutStatus};
use crate::error::AppResult;
use crate::keyboard::{KeyboardProfile, ProfileError, ProfileStore, Services};
use log::*;
use std::collections::HashMap;
use std::io::Write;

/// Operations offered on the command line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every profile with its title and number of shortcuts
    List,
    /// Load a profile and report the validation status of every shortcut
    Check { profile: Option<String> },
    /// Load a profile, drop invalid shortcuts and save it back normalized
    Normalize { profile: Option<String> },
}

/// Runs profile commands against the configured profiles directory.
///
pub struct App {
    config: Config,
    profiles: ProfileStore,
}

impl App {
    pub fn new(config: Config) -> AppResult<App> {
        let profiles = ProfileStore::new(config.profiles_directory()?);
        Ok(App { config, profiles })
    }

    /// Execute the command, writing its report to `out`. Returns `false`
    /// when the checked profile holds conflicting shortcuts.
    ///
    pub fn run<W: Write>(&self, command: Command, out: &mut W) -> AppResult<bool> {
        debug!("Running {:?} in {}.", command, self.profiles.directory().display());
        match command {
            Command::List => self.list(out),
            Command::Check { profile } => self.check(profile.as_deref(), out),
            Command::Normalize { profile } => self.normalize(profile.as_deref(), out),
        }
    }

    fn list<W: Write>(&self, out: &mut W) -> AppResult<bool> {
        let services = Services::default();
        let profiles = self.profiles.load_all(services.actions.as_ref())?;
        let mut names: Vec<&String> = profiles.keys().collect();
        names.sort();

        for name in names {
            let profile = &profiles[name];
            writeln!(
                out,
                "{:<20} {:<32} {:>4} shortcuts",
                name,
                profile.get_title(),
                profile.shortcut_count()
            )?;
        }
        Ok(true)
    }

    fn check<W: Write>(&self, profile: Option<&str>, out: &mut W) -> AppResult<bool> {
        let editor = self.open_editor(profile)?;
        let mut errors = 0;

        for row in editor.rows() {
            writeln!(out, "{}", describe_row(row))?;
            for line in row.message.lines() {
                writeln!(out, "    {}", line)?;
            }
            if row.status == ShortcutStatus::Error {
                errors += 1;
            }
        }

        writeln!(
            out,
            "{}: {} shortcuts, {} conflicting",
            editor.get_profile_name(),
            editor.rows().len(),
            errors
        )?;
        Ok(errors == 0)
    }

    fn normalize<W: Write>(&self, profile: Option<&str>, out: &mut W) -> AppResult<bool> {
        let editor = self.open_editor(profile)?;
        let dropped = editor
            .rows()
            .iter()
            .filter(|row| row.status == ShortcutStatus::Error)
            .count();
        let profile: KeyboardProfile = editor.profile();
        let path = self
            .profiles
            .save(&profile, editor.services().actions.as_ref())?;

        if dropped > 0 {
            warn!("Dropped {} conflicting shortcuts from {}.", dropped, profile.get_name());
        }
        writeln!(
            out,
            "Saved {} ({} shortcuts, {} dropped) to {}",
            profile.get_name(),
            profile.shortcut_count(),
            dropped,
            path.display()
        )?;
        Ok(true)
    }

    fn open_editor(&self, profile: Option<&str>) -> AppResult<ProfileEditor> {
        let name = profile.unwrap_or(self.config.default_profile.as_str());
        let services = Services::default();
        let profiles: HashMap<String, KeyboardProfile> =
            self.profiles.load_all(services.actions.as_ref())?;
        if !profiles.contains_key(name) {
            return Err(ProfileError::ProfileNotFound {
                name: name.to_string(),
            }
            .into());
        }

        Ok(ProfileEditor::new(
            name,
            &profiles,
            self.config.single_key_shortcuts_allowed,
            services,
        ))
    }
}

fn describe_row(row: &ShortcutRow) -> String {
    let mark = match row.status {
        ShortcutStatus::Normal => ' ',
        ShortcutStatus::Warning => '!',
        ShortcutStatus::Error => 'x',
    };
    let mut line = format!("{} {:<32} {:<20}", mark, row.tool_tip(), row.shortcut.to_string());
    let parameters = row.parameters_text();
    if !parameters.is_empty() {
        line.push(' ');
        line.push_str(&parameters);
    }
    if row.is_disabled {
        line.push_str(" (disabled)");
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::ActionRegistry;

    #[test]
    fn test_describe_row() {
        let services = Services::default();
        let copy = services.actions.identifier("Copy").unwrap();
        let row = ShortcutRow::blank(true)
            .with_action(services.actions.definition(copy).unwrap())
            .with_shortcut("Ctrl+C".parse().unwrap());

        let line = describe_row(&row);
        assert!(line.starts_with("  Copy (Copy)"));
        assert!(line.contains("Ctrl+C"));
        assert!(line.ends_with("(disabled)"));
    }
}
