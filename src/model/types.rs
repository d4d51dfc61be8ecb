//! Core type definitions for requests and match decisions

use std::fmt;

use serde::{Deserialize, Serialize};

use super::content::SearchResults;

/// What a spoken request asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Album,
    Artist,
    Movie,
    Title,
}

impl RequestType {
    /// Categories in the order the classifier tries them. First match wins.
    pub const PRIORITY: [RequestType; 4] = [
        RequestType::Album,
        RequestType::Artist,
        RequestType::Movie,
        RequestType::Title,
    ];

    /// Name of the capture group a category pattern must expose.
    /// Doubles as the Kodi filter field for music searches.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Movie => "movie",
            Self::Title => "title",
        }
    }

    /// Stem of the resource file holding the category pattern
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Album => "album.type",
            Self::Artist => "artist.type",
            Self::Movie => "movie.type",
            Self::Title => "song.type",
        }
    }

    pub fn is_music(self) -> bool {
        !matches!(self, Self::Movie)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phrase reduced to the item it names and the kind of item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedRequest {
    pub item: String,
    pub kind: RequestType,
}

/// How confident the skill is that it can service a phrase
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Exact,
}

impl MatchLevel {
    pub fn confidence(self) -> f32 {
        match self {
            Self::Exact => 1.0,
        }
    }
}

/// Data handed to the host with a match and returned unchanged on start
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchPayload {
    pub library: SearchResults,
    pub request: String,
    #[serde(rename = "type")]
    pub kind: RequestType,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchDecision {
    pub phrase: String,
    pub level: MatchLevel,
    pub payload: MatchPayload,
}

/// Non-playback commands routed to the skill by the host's intent engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentKind {
    Stop,
    Pause,
    Resume,
    NotifyOn,
    NotifyOff,
}

impl IntentKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "StopIntent" => Some(Self::Stop),
            "PauseIntent" => Some(Self::Pause),
            "ResumeIntent" => Some(Self::Resume),
            "NotifyOnIntent" => Some(Self::NotifyOn),
            "NotifyOffIntent" => Some(Self::NotifyOff),
            _ => None,
        }
    }
}
