#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use kodi_skill::model::{
    ConnectionConfig, Dialogs, MediaCenter, Movie, PatternSet, RequestType, SkillSession, Song,
};
use kodi_skill::{KodiSkill, Result, Settings, SettingsStore, SkillError};

/// One outbound call seen by the fake media center
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Notify(String),
    SearchMovies(String),
    SearchMusic(String, RequestType),
    PlaylistClear,
    PlaylistAdd(Vec<u64>),
    ActivePlayers,
    Stop(u64),
    PlayPause(u64, bool),
    OpenPlaylist,
    OpenMovie(u64),
}

/// Media center that records calls and answers from canned data
#[derive(Clone, Default)]
pub struct RecordingMediaCenter {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub songs: Vec<Song>,
    pub movies: Vec<Movie>,
    pub players: Vec<u64>,
    pub fail: bool,
    pub fail_add: bool,
}

impl RecordingMediaCenter {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        let failing = self.fail || (self.fail_add && matches!(call, Call::PlaylistAdd(_)));
        self.calls.lock().unwrap().push(call);
        if failing {
            Err(SkillError::Rpc {
                code: -32100,
                message: "Failed to execute method.".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MediaCenter for RecordingMediaCenter {
    async fn notify(&self, _connection: &ConnectionConfig, _title: &str, message: &str) -> Result<()> {
        self.record(Call::Notify(message.to_string()))
    }

    async fn search_movies(&self, _connection: &ConnectionConfig, query: &str) -> Result<Vec<Movie>> {
        self.record(Call::SearchMovies(query.to_string()))?;
        Ok(self.movies.clone())
    }

    async fn search_music(
        &self,
        _connection: &ConnectionConfig,
        query: &str,
        field: RequestType,
    ) -> Result<Vec<Song>> {
        self.record(Call::SearchMusic(query.to_string(), field))?;
        Ok(self.songs.clone())
    }

    async fn playlist_clear(&self, _connection: &ConnectionConfig) -> Result<()> {
        self.record(Call::PlaylistClear)
    }

    async fn playlist_add(&self, _connection: &ConnectionConfig, song_ids: &[u64]) -> Result<()> {
        self.record(Call::PlaylistAdd(song_ids.to_vec()))
    }

    async fn active_players(&self, _connection: &ConnectionConfig) -> Result<Vec<u64>> {
        self.record(Call::ActivePlayers)?;
        Ok(self.players.clone())
    }

    async fn stop(&self, _connection: &ConnectionConfig, player_id: u64) -> Result<()> {
        self.record(Call::Stop(player_id))
    }

    async fn play_pause(&self, _connection: &ConnectionConfig, player_id: u64, play: bool) -> Result<()> {
        self.record(Call::PlayPause(player_id, play))
    }

    async fn open_playlist(&self, _connection: &ConnectionConfig) -> Result<()> {
        self.record(Call::OpenPlaylist)
    }

    async fn open_movie(&self, _connection: &ConnectionConfig, movie_id: u64) -> Result<()> {
        self.record(Call::OpenMovie(movie_id))
    }
}

pub fn complete_settings() -> Settings {
    Settings {
        kodi_ip: "127.0.0.1".to_string(),
        kodi_port: "8080".to_string(),
        kodi_user: "kodi".to_string(),
        kodi_pass: "kodi".to_string(),
        resources: resources_dir(),
        ..Settings::default()
    }
}

pub fn empty_settings() -> Settings {
    Settings {
        kodi_ip: String::new(),
        kodi_port: String::new(),
        kodi_user: String::new(),
        kodi_pass: String::new(),
        resources: resources_dir(),
        ..Settings::default()
    }
}

pub fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("locale").join("en-us")
}

pub fn skill(api: RecordingMediaCenter, settings: Settings) -> KodiSkill<RecordingMediaCenter> {
    let session = SkillSession::new(SettingsStore::in_memory(settings));
    KodiSkill::with_resources(api, session)
}

pub fn skill_with_patterns(
    api: RecordingMediaCenter,
    patterns: PatternSet,
) -> KodiSkill<RecordingMediaCenter> {
    let session = SkillSession::new(SettingsStore::in_memory(complete_settings()));
    KodiSkill::new(api, session, patterns, Dialogs::default())
}

pub fn song(id: u64, title: &str) -> Song {
    Song {
        songid: id,
        label: title.to_string(),
        title: title.to_string(),
        ..Song::default()
    }
}
