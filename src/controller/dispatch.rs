//! Event routing and error translation

use crate::error::{Result, SkillError};
use crate::model::{IntentKind, MediaCenter};

use super::{KodiSkill, SkillEvent, SkillReply};

impl<M: MediaCenter> KodiSkill<M> {
    /// Handle one host event to completion.
    ///
    /// Errors never leave this method: they are logged, the connection is
    /// re-derived from the settings, and the host gets an empty answer.
    pub async fn handle(&mut self, event: SkillEvent) -> SkillReply {
        let handler = Self::handler_name(&event);
        let fallback = match &event {
            SkillEvent::QueryPhrase { phrase } => SkillReply::NoMatch {
                phrase: phrase.clone(),
            },
            _ => SkillReply::Nothing,
        };

        match self.route(event).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    SkillError::NotConfigured => {
                        tracing::info!(handler, "Kodi connection not configured, skipping");
                    }
                    _ => {
                        tracing::error!(handler, error = %e, "An error was detected while handling event");
                    }
                }
                self.refresh();
                fallback
            }
        }
    }

    async fn route(&mut self, event: SkillEvent) -> Result<SkillReply> {
        match event {
            SkillEvent::WakeWord => self.handle_listen().await,
            SkillEvent::Utterance { utterances } => self.handle_utterance(&utterances).await,
            SkillEvent::Speak { utterance } => self.handle_speak(&utterance).await,
            SkillEvent::Intent(IntentKind::Stop) => self.handle_stop().await,
            SkillEvent::Intent(IntentKind::Pause) => self.handle_pause().await,
            SkillEvent::Intent(IntentKind::Resume) => self.handle_resume().await,
            SkillEvent::Intent(IntentKind::NotifyOn) => Ok(self.set_notifications(true)),
            SkillEvent::Intent(IntentKind::NotifyOff) => Ok(self.set_notifications(false)),
            SkillEvent::QueryPhrase { phrase } => self.match_query(phrase).await,
            SkillEvent::Start { phrase, payload } => self.start(&phrase, payload).await,
            SkillEvent::SettingsChanged => {
                self.refresh();
                Ok(SkillReply::Nothing)
            }
        }
    }

    fn handler_name(event: &SkillEvent) -> &'static str {
        match event {
            SkillEvent::WakeWord => "handle_listen",
            SkillEvent::Utterance { .. } => "handle_utterance",
            SkillEvent::Speak { .. } => "handle_speak",
            SkillEvent::Intent(IntentKind::Stop) => "handle_stop_intent",
            SkillEvent::Intent(IntentKind::Pause) => "handle_pause_intent",
            SkillEvent::Intent(IntentKind::Resume) => "handle_resume_intent",
            SkillEvent::Intent(IntentKind::NotifyOn) => "handle_notification_on_intent",
            SkillEvent::Intent(IntentKind::NotifyOff) => "handle_notification_off_intent",
            SkillEvent::QueryPhrase { .. } => "match_query",
            SkillEvent::Start { .. } => "start",
            SkillEvent::SettingsChanged => "settings_changed",
        }
    }
}
