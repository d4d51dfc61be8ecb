//! Voice-assistant skill that searches and controls a Kodi media center
//!
//! Phrases are classified against per-category regex resources, searched
//! through Kodi's JSON-RPC API and queued for playback. Assistant lifecycle
//! events can be mirrored to Kodi as on-screen notifications.

pub mod bus;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod settings;

pub use controller::{KodiSkill, SkillEvent, SkillReply};
pub use error::{Result, SkillError};
pub use settings::{Settings, SettingsStore};
