//! Browser action registry.
//!
//! Resolves action identifiers to their display text, icon and category, and
//! maps identifiers to the stable names used in profile files.

use super::profile::ActionId;
use std::collections::HashMap;

/// Broad classification of an action.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Other,
    Window,
    Page,
    Navigation,
    Editing,
    Link,
    Image,
    Media,
    Bookmark,
    Tools,
    Help,
}

/// Everything the editor needs to know about a single action.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDefinition {
    pub identifier: ActionId,
    pub name: String,
    pub text: String,
    pub icon: Option<String>,
    pub category: ActionCategory,
}

/// Lookup of action definitions by identifier or stable name.
///
pub trait ActionRegistry {
    fn definition(&self, identifier: ActionId) -> Option<&ActionDefinition>;

    fn identifier(&self, name: &str) -> Option<ActionId>;

    /// Stable name of an action, empty for unknown identifiers.
    ///
    fn name(&self, identifier: ActionId) -> String {
        self.definition(identifier)
            .map(|definition| definition.name.clone())
            .unwrap_or_default()
    }
}

// name, text, icon, category
const BUILTIN_ACTIONS: &[(&str, &str, Option<&str>, ActionCategory)] = &[
    ("RunMacro", "Run Macro", None, ActionCategory::Other),
    ("NewWindow", "New Window", Some("window-new"), ActionCategory::Window),
    ("NewWindowPrivate", "New Private Window", Some("window-new-private"), ActionCategory::Window),
    ("NewTab", "New Tab", Some("tab-new"), ActionCategory::Window),
    ("NewTabPrivate", "New Private Tab", Some("tab-new-private"), ActionCategory::Window),
    ("CloseTab", "Close Tab", Some("tab-close"), ActionCategory::Window),
    ("ReopenTab", "Reopen Previously Closed Tab", None, ActionCategory::Window),
    ("ActivateTab", "Activate Tab", None, ActionCategory::Window),
    ("ActivatePreviouslyUsedTab", "Go to Previously Used Tab", None, ActionCategory::Window),
    ("ActivateTabOnLeft", "Go to Tab on Left", None, ActionCategory::Window),
    ("ActivateTabOnRight", "Go to Tab on Right", None, ActionCategory::Window),
    ("CloseWindow", "Close Window", None, ActionCategory::Window),
    ("Open", "Open…", Some("document-open"), ActionCategory::Page),
    ("SaveAs", "Save As…", Some("document-save"), ActionCategory::Page),
    ("Print", "Print…", Some("document-print"), ActionCategory::Page),
    ("Reload", "Reload", Some("view-refresh"), ActionCategory::Navigation),
    ("ReloadOrStop", "Reload or Stop", Some("view-refresh"), ActionCategory::Navigation),
    ("Stop", "Stop", Some("process-stop"), ActionCategory::Navigation),
    ("GoBack", "Back", Some("go-previous"), ActionCategory::Navigation),
    ("GoForward", "Forward", Some("go-next"), ActionCategory::Navigation),
    ("GoToHomePage", "Go to Home Page", Some("go-home"), ActionCategory::Navigation),
    ("GoToPage", "Go to Page or Search", None, ActionCategory::Navigation),
    ("Undo", "Undo", Some("edit-undo"), ActionCategory::Editing),
    ("Redo", "Redo", Some("edit-redo"), ActionCategory::Editing),
    ("Cut", "Cut", Some("edit-cut"), ActionCategory::Editing),
    ("Copy", "Copy", Some("edit-copy"), ActionCategory::Editing),
    ("Paste", "Paste", Some("edit-paste"), ActionCategory::Editing),
    ("Delete", "Delete", Some("edit-delete"), ActionCategory::Editing),
    ("SelectAll", "Select All", Some("edit-select-all"), ActionCategory::Editing),
    ("Find", "Find…", Some("edit-find"), ActionCategory::Editing),
    ("FindNext", "Find Next", None, ActionCategory::Editing),
    ("FindPrevious", "Find Previous", None, ActionCategory::Editing),
    ("OpenLink", "Open Link", None, ActionCategory::Link),
    ("OpenLinkInNewTab", "Open Link in New Tab", None, ActionCategory::Link),
    ("CopyLinkToClipboard", "Copy Link to Clipboard", None, ActionCategory::Link),
    ("OpenImageInNewTab", "Open Image in New Tab", None, ActionCategory::Image),
    ("SaveImageToDisk", "Save Image…", None, ActionCategory::Image),
    ("MediaPlayPause", "Play", Some("media-playback-start"), ActionCategory::Media),
    ("MediaMute", "Mute", Some("audio-volume-muted"), ActionCategory::Media),
    ("BookmarkPage", "Add Bookmark…", Some("bookmark-new"), ActionCategory::Bookmark),
    ("Bookmarks", "Manage Bookmarks", Some("bookmarks-organize"), ActionCategory::Bookmark),
    ("ZoomIn", "Zoom In", Some("zoom-in"), ActionCategory::Page),
    ("ZoomOut", "Zoom Out", Some("zoom-out"), ActionCategory::Page),
    ("ZoomOriginal", "Zoom Original", Some("zoom-original"), ActionCategory::Page),
    ("ViewSource", "View Source", None, ActionCategory::Page),
    ("FullScreen", "Full Screen", Some("view-fullscreen"), ActionCategory::Window),
    ("ShowSidebar", "Show Sidebar", Some("sidebar-show"), ActionCategory::Window),
    ("History", "Manage History", Some("view-history"), ActionCategory::Tools),
    ("Transfers", "Manage Transfers", Some("transfers"), ActionCategory::Tools),
    ("CacheContents", "Cache", Some("cache"), ActionCategory::Tools),
    ("Preferences", "Preferences…", Some("configure"), ActionCategory::Tools),
    ("ContentBlocking", "Content Blocking…", None, ActionCategory::Tools),
    ("ErrorConsole", "Error Console", None, ActionCategory::Tools),
    ("ReportIssue", "Report Issue…", None, ActionCategory::Help),
    ("AboutApplication", "About", Some("help-about"), ActionCategory::Help),
    ("Exit", "Exit", Some("application-exit"), ActionCategory::Other),
];

/// Registry holding the browser's built-in actions, identified by their
/// position in the built-in table.
///
#[derive(Debug, Clone)]
pub struct BuiltinActions {
    definitions: Vec<ActionDefinition>,
    identifiers: HashMap<String, ActionId>,
}

impl BuiltinActions {
    pub fn new() -> Self {
        let definitions: Vec<ActionDefinition> = BUILTIN_ACTIONS
            .iter()
            .enumerate()
            .map(|(index, (name, text, icon, category))| ActionDefinition {
                identifier: index as ActionId,
                name: name.to_string(),
                text: text.to_string(),
                icon: icon.map(str::to_string),
                category: *category,
            })
            .collect();
        let identifiers = definitions
            .iter()
            .map(|definition| (definition.name.clone(), definition.identifier))
            .collect();

        BuiltinActions {
            definitions,
            identifiers,
        }
    }

    pub fn definitions(&self) -> &[ActionDefinition] {
        &self.definitions
    }
}

impl Default for BuiltinActions {
    fn default() -> Self {
        BuiltinActions::new()
    }
}

impl ActionRegistry for BuiltinActions {
    fn definition(&self, identifier: ActionId) -> Option<&ActionDefinition> {
        usize::try_from(identifier)
            .ok()
            .and_then(|index| self.definitions.get(index))
    }

    fn identifier(&self, name: &str) -> Option<ActionId> {
        self.identifiers.get(name).copied()
    }
}
