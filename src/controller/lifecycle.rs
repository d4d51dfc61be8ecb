//! Assistant lifecycle events mirrored to Kodi as notifications

use crate::error::{Result, SkillError};
use crate::model::MediaCenter;

use super::{KodiSkill, SkillReply};

const LISTENING: &str = "Listening";

impl<M: MediaCenter> KodiSkill<M> {
    pub(crate) async fn handle_listen(&mut self) -> Result<SkillReply> {
        self.post_notification(LISTENING).await
    }

    pub(crate) async fn handle_utterance(&mut self, utterances: &[String]) -> Result<SkillReply> {
        match utterances.first() {
            Some(utterance) => self.post_notification(utterance).await,
            None => Ok(SkillReply::Nothing),
        }
    }

    pub(crate) async fn handle_speak(&mut self, utterance: &str) -> Result<SkillReply> {
        self.post_notification(utterance).await
    }

    pub(crate) fn set_notifications(&mut self, enabled: bool) -> SkillReply {
        self.session.notifier.set_enabled(enabled);
        tracing::info!(enabled, "Kodi notifications toggled");
        SkillReply::Speak(self.dialogs.notification(if enabled { "On" } else { "Off" }))
    }

    async fn post_notification(&mut self, message: &str) -> Result<SkillReply> {
        if !self.session.notifier.is_enabled() {
            return Ok(SkillReply::Nothing);
        }

        let connection = self.session.connection().ok_or(SkillError::NotConfigured)?;
        let title = &self.session.settings().notification_title;
        tracing::trace!(message, "Posting Kodi notification");
        self.api.notify(connection, title, message).await?;
        Ok(SkillReply::Nothing)
    }
}
