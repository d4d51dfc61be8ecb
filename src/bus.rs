//! Line-delimited JSON message bus between the host runtime and the skill
//!
//! Each line is one message shaped like `{"type": "...", "data": {...}}`.
//! Inbound messages are translated into [`SkillEvent`]s and replies back into
//! messages for the host.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::controller::{SkillEvent, SkillReply};
use crate::model::{IntentKind, MatchPayload};

pub const SKILL_ID: &str = "kodi-skill";

const WAKEWORD: &str = "recognizer_loop:wakeword";
const UTTERANCE: &str = "recognizer_loop:utterance";
const SPEAK: &str = "speak";
const PLAY_QUERY: &str = "play:query";
const PLAY_QUERY_RESPONSE: &str = "play:query.response";
const PLAY_START: &str = "play:start";
const SETTINGS_CHANGED: &str = "mycroft.skills.settings.changed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl BusMessage {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Translate a host message into a skill event; `None` for messages the
    /// skill does not subscribe to or whose data is unusable.
    pub fn to_event(&self) -> Option<SkillEvent> {
        match self.kind.as_str() {
            WAKEWORD => Some(SkillEvent::WakeWord),
            UTTERANCE => {
                let utterances = self
                    .data
                    .get("utterances")
                    .and_then(Value::as_array)
                    .map(|list| {
                        list.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Some(SkillEvent::Utterance { utterances })
            }
            SPEAK => Some(SkillEvent::Speak {
                utterance: self.str_field("utterance")?,
            }),
            // Every query gets a response, even one without a phrase
            PLAY_QUERY => Some(SkillEvent::QueryPhrase {
                phrase: self.str_field("phrase").unwrap_or_default(),
            }),
            PLAY_START => {
                let callback = self.data.get("callback_data")?.clone();
                let payload: MatchPayload = match serde_json::from_value(callback) {
                    Ok(payload) => payload,
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring play:start with unreadable callback data");
                        return None;
                    }
                };
                Some(SkillEvent::Start {
                    phrase: self.str_field("phrase").unwrap_or_default(),
                    payload,
                })
            }
            SETTINGS_CHANGED => Some(SkillEvent::SettingsChanged),
            other => {
                let name = other
                    .strip_prefix(SKILL_ID)
                    .and_then(|rest| rest.strip_prefix(':'))
                    .unwrap_or(other);
                IntentKind::from_name(name).map(SkillEvent::Intent)
            }
        }
    }

    fn str_field(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Message to send back to the host for a reply, if any
    pub fn from_reply(reply: &SkillReply) -> Option<Self> {
        match reply {
            SkillReply::Nothing => None,
            SkillReply::Speak(utterance) => Some(Self::new(SPEAK, json!({ "utterance": utterance }))),
            SkillReply::Match(decision) => {
                let callback_data = match serde_json::to_value(&decision.payload) {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::error!(error = %e, "Could not encode match payload");
                        return None;
                    }
                };
                Some(Self::new(
                    PLAY_QUERY_RESPONSE,
                    json!({
                        "phrase": decision.phrase,
                        "skill_id": SKILL_ID,
                        "conf": decision.level.confidence(),
                        "callback_data": callback_data,
                    }),
                ))
            }
            SkillReply::NoMatch { phrase } => Some(Self::new(
                PLAY_QUERY_RESPONSE,
                json!({ "phrase": phrase, "skill_id": SKILL_ID, "searching": false }),
            )),
        }
    }
}
