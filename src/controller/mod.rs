//! Controller module - Skill logic and event handling
//!
//! This module contains the skill controller that receives host events,
//! coordinates between the session state and the media center, and turns
//! every outcome into a reply for the host.
//! It is organized into submodules by responsibility:
//!
//! - `dispatch`: Event routing and error translation
//! - `query`: Phrase matching and library search
//! - `playback`: Queue building and transport commands
//! - `lifecycle`: Assistant lifecycle notifications

mod dispatch;
mod query;
mod playback;
mod lifecycle;

pub use query::search;
pub use playback::queue;

use std::path::PathBuf;

use crate::model::{
    Dialogs, IntentKind, MatchDecision, MatchPayload, MediaCenter, PatternSet, SkillSession,
};

/// Something the host runtime asks of the skill
#[derive(Clone, Debug, PartialEq)]
pub enum SkillEvent {
    WakeWord,
    Utterance { utterances: Vec<String> },
    Speak { utterance: String },
    Intent(IntentKind),
    QueryPhrase { phrase: String },
    Start { phrase: String, payload: MatchPayload },
    SettingsChanged,
}

/// The skill's answer to a [`SkillEvent`]
#[derive(Clone, Debug, PartialEq)]
pub enum SkillReply {
    Nothing,
    Speak(String),
    Match(MatchDecision),
    NoMatch { phrase: String },
}

pub struct KodiSkill<M> {
    pub(crate) api: M,
    pub(crate) session: SkillSession,
    pub(crate) patterns: PatternSet,
    pub(crate) dialogs: Dialogs,
    resources: Option<PathBuf>,
}

impl<M: MediaCenter> KodiSkill<M> {
    pub fn new(api: M, session: SkillSession, patterns: PatternSet, dialogs: Dialogs) -> Self {
        Self {
            api,
            session,
            patterns,
            dialogs,
            resources: None,
        }
    }

    /// Build a skill whose patterns and dialogs come from the configured
    /// resource directory. They are reloaded whenever a refresh finds that
    /// directory changed.
    pub fn with_resources(api: M, session: SkillSession) -> Self {
        let resources = session.settings().resources.clone();
        let patterns = PatternSet::load(&resources);
        let dialogs = Dialogs::load(&resources);
        Self {
            resources: Some(resources),
            ..Self::new(api, session, patterns, dialogs)
        }
    }

    /// Re-read settings, then reload resources if their directory moved
    pub(crate) fn refresh(&mut self) {
        self.session.refresh();

        let Some(loaded) = &self.resources else {
            return;
        };
        let configured = &self.session.settings().resources;
        if configured != loaded {
            tracing::info!(from = %loaded.display(), to = %configured.display(), "Resource directory changed, reloading");
            self.patterns = PatternSet::load(configured);
            self.dialogs = Dialogs::load(configured);
            self.resources = Some(configured.clone());
        }
    }

    pub fn session(&self) -> &SkillSession {
        &self.session
    }

    pub fn notifications_enabled(&self) -> bool {
        self.session.notifier.is_enabled()
    }
}
