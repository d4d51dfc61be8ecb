//! Skill settings stored as TOML in the user's config directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const SETTINGS_ENV: &str = "KODI_SKILL_SETTINGS";
const SETTINGS_DIR: &str = "kodi-skill";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub kodi_ip: String,
    pub kodi_port: String,
    pub kodi_user: String,
    pub kodi_pass: String,
    /// Directory holding `*.type.regex` and `*.dialog` resources
    pub resources: PathBuf,
    pub notification_title: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kodi_ip: "192.168.0.32".to_string(),
            kodi_port: "8080".to_string(),
            kodi_user: String::new(),
            kodi_pass: String::new(),
            resources: PathBuf::from("locale/en-us"),
            notification_title: "Mycroft".to_string(),
            request_timeout_secs: 5,
        }
    }
}

impl Settings {
    /// Settings file location: `$KODI_SKILL_SETTINGS`, else
    /// `<config dir>/kodi-skill/settings.toml`
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(SETTINGS_ENV) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".config")
            })
            .join(SETTINGS_DIR)
            .join(SETTINGS_FILE)
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let settings = toml::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded settings");
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Where the skill re-reads its settings from on every refresh
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    current: Settings,
}

impl SettingsStore {
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let current = Settings::load(&path)?;
        Ok(Self {
            path: Some(path),
            current,
        })
    }

    pub fn in_memory(settings: Settings) -> Self {
        Self {
            path: None,
            current: settings,
        }
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Re-read the backing file, keeping the previous settings if it is unreadable
    pub fn reload(&mut self) -> &Settings {
        if let Some(path) = &self.path {
            match Settings::load(path) {
                Ok(settings) => self.current = settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Could not reload settings, keeping previous values");
                }
            }
        }
        &self.current
    }
}
