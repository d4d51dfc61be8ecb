//! Spoken responses rendered from `*.dialog` resource files

use std::collections::HashMap;
use std::fs;
use std::path::Path;

const NOTIFICATION_DIALOG: &str = "notification";
const NOTIFICATION_FALLBACK: &str = "kodi notifications are turned {result}";

/// Dialog templates keyed by name. Only the first non-empty line of a file is
/// used so replies stay deterministic.
#[derive(Clone, Debug, Default)]
pub struct Dialogs {
    templates: HashMap<String, String>,
}

impl Dialogs {
    pub fn load(dir: &Path) -> Self {
        let mut templates = HashMap::new();
        let path = dir.join(format!("{NOTIFICATION_DIALOG}.dialog"));
        match fs::read_to_string(&path) {
            Ok(content) => {
                if let Some(line) = content.lines().map(str::trim).find(|l| !l.is_empty()) {
                    templates.insert(NOTIFICATION_DIALOG.to_string(), line.to_string());
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Dialog file unavailable, using built-in text");
            }
        }
        Self { templates }
    }

    /// Sentence announcing the notification toggle, e.g. "On" or "Off"
    pub fn notification(&self, result: &str) -> String {
        self.templates
            .get(NOTIFICATION_DIALOG)
            .map(String::as_str)
            .unwrap_or(NOTIFICATION_FALLBACK)
            .replace("{{result}}", result)
            .replace("{result}", result)
    }
}
