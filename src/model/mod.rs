//! Model module - Skill state, request types and the Kodi client
//!
//! This module contains the data structures and state the skill works with.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Request types, match decisions and intents
//! - `content`: Library records returned by Kodi searches
//! - `patterns`: Category regexes loaded from resource files
//! - `classifier`: Phrase to request classification
//! - `dialog`: Spoken response templates
//! - `session`: Connection configuration and notifier state
//! - `jsonrpc`: JSON-RPC envelope types
//! - `kodi_client`: Kodi API client behind the `MediaCenter` trait

mod types;
mod content;
mod patterns;
mod classifier;
mod dialog;
mod session;
mod jsonrpc;
mod kodi_client;

// Re-export all public types for convenient access
pub use types::{
    ClassifiedRequest, IntentKind, MatchDecision, MatchLevel, MatchPayload, RequestType,
};

pub use content::{Movie, SearchResults, Song};

pub use patterns::PatternSet;
pub use classifier::classify;
pub use dialog::Dialogs;

pub use session::{ConnectionConfig, NotifierState, SkillSession};

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use kodi_client::{KodiClient, MediaCenter, AUDIO_PLAYLIST};
