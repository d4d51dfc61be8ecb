//! Kodi JSON-RPC client and the media-center seam the skill talks through

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::content::{Movie, Song};
use super::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use super::session::ConnectionConfig;
use super::types::RequestType;
use crate::error::Result;
use crate::{log_api_request, log_api_result};

/// Kodi's audio playlist
pub const AUDIO_PLAYLIST: u64 = 0;

const NOTIFICATION_DISPLAY_MS: u64 = 5000;
const SONG_PROPERTIES: [&str; 5] = ["title", "artist", "album", "file", "thumbnail"];
const MOVIE_PROPERTIES: [&str; 4] = ["title", "year", "file", "thumbnail"];

/// Operations the skill needs from a media center
#[async_trait]
pub trait MediaCenter: Send + Sync {
    async fn notify(&self, connection: &ConnectionConfig, title: &str, message: &str) -> Result<()>;

    async fn search_movies(&self, connection: &ConnectionConfig, query: &str) -> Result<Vec<Movie>>;

    async fn search_music(
        &self,
        connection: &ConnectionConfig,
        query: &str,
        field: RequestType,
    ) -> Result<Vec<Song>>;

    async fn playlist_clear(&self, connection: &ConnectionConfig) -> Result<()>;

    async fn playlist_add(&self, connection: &ConnectionConfig, song_ids: &[u64]) -> Result<()>;

    async fn active_players(&self, connection: &ConnectionConfig) -> Result<Vec<u64>>;

    async fn stop(&self, connection: &ConnectionConfig, player_id: u64) -> Result<()>;

    async fn play_pause(&self, connection: &ConnectionConfig, player_id: u64, play: bool) -> Result<()>;

    async fn open_playlist(&self, connection: &ConnectionConfig) -> Result<()>;

    async fn open_movie(&self, connection: &ConnectionConfig, movie_id: u64) -> Result<()>;
}

/// JSON-RPC over HTTP client for a Kodi instance
#[derive(Clone)]
pub struct KodiClient {
    http: reqwest::Client,
    next_id: Arc<AtomicU64>,
}

#[derive(Deserialize)]
struct MovieList {
    #[serde(default)]
    movies: Vec<Movie>,
}

#[derive(Deserialize)]
struct SongList {
    #[serde(default)]
    songs: Vec<Song>,
}

#[derive(Deserialize)]
struct ActivePlayer {
    playerid: u64,
}

impl KodiClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        connection: &ConnectionConfig,
        method: &str,
        params: Value,
    ) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log_api_request!(method, id, endpoint = %connection.endpoint);

        let request = JsonRpcRequest::new(id, method, params);
        let result: Result<T> = async {
            let response: JsonRpcResponse = self
                .http
                .post(&connection.endpoint)
                .timeout(connection.timeout)
                .basic_auth(&connection.user, Some(&connection.password))
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            let value = response.into_result(method)?;
            Ok(serde_json::from_value(value)?)
        }
        .await;

        log_api_result!(method, id, result);
        result
    }

    /// Call a method whose result is an acknowledgement such as `"OK"`
    async fn command(&self, connection: &ConnectionConfig, method: &str, params: Value) -> Result<()> {
        let _: Value = self.call(connection, method, params).await?;
        Ok(())
    }
}

#[async_trait]
impl MediaCenter for KodiClient {
    async fn notify(&self, connection: &ConnectionConfig, title: &str, message: &str) -> Result<()> {
        self.command(
            connection,
            "GUI.ShowNotification",
            json!({ "title": title, "message": message, "displaytime": NOTIFICATION_DISPLAY_MS }),
        )
        .await
    }

    async fn search_movies(&self, connection: &ConnectionConfig, query: &str) -> Result<Vec<Movie>> {
        let list: MovieList = self
            .call(
                connection,
                "VideoLibrary.GetMovies",
                json!({
                    "filter": { "field": "title", "operator": "contains", "value": query },
                    "properties": MOVIE_PROPERTIES,
                }),
            )
            .await?;
        tracing::debug!(query, count = list.movies.len(), "Movie search finished");
        Ok(list.movies)
    }

    async fn search_music(
        &self,
        connection: &ConnectionConfig,
        query: &str,
        field: RequestType,
    ) -> Result<Vec<Song>> {
        let list: SongList = self
            .call(
                connection,
                "AudioLibrary.GetSongs",
                json!({
                    "filter": { "field": field.as_str(), "operator": "contains", "value": query },
                    "properties": SONG_PROPERTIES,
                }),
            )
            .await?;
        tracing::debug!(query, field = %field, count = list.songs.len(), "Music search finished");
        Ok(list.songs)
    }

    async fn playlist_clear(&self, connection: &ConnectionConfig) -> Result<()> {
        self.command(connection, "Playlist.Clear", json!({ "playlistid": AUDIO_PLAYLIST }))
            .await
    }

    async fn playlist_add(&self, connection: &ConnectionConfig, song_ids: &[u64]) -> Result<()> {
        let items: Vec<Value> = song_ids.iter().map(|id| json!({ "songid": id })).collect();
        self.command(
            connection,
            "Playlist.Add",
            json!({ "playlistid": AUDIO_PLAYLIST, "item": items }),
        )
        .await
    }

    async fn active_players(&self, connection: &ConnectionConfig) -> Result<Vec<u64>> {
        let players: Vec<ActivePlayer> = self
            .call(connection, "Player.GetActivePlayers", Value::Null)
            .await?;
        Ok(players.into_iter().map(|p| p.playerid).collect())
    }

    async fn stop(&self, connection: &ConnectionConfig, player_id: u64) -> Result<()> {
        self.command(connection, "Player.Stop", json!({ "playerid": player_id }))
            .await
    }

    async fn play_pause(&self, connection: &ConnectionConfig, player_id: u64, play: bool) -> Result<()> {
        self.command(
            connection,
            "Player.PlayPause",
            json!({ "playerid": player_id, "play": play }),
        )
        .await
    }

    async fn open_playlist(&self, connection: &ConnectionConfig) -> Result<()> {
        self.command(
            connection,
            "Player.Open",
            json!({ "item": { "playlistid": AUDIO_PLAYLIST } }),
        )
        .await
    }

    async fn open_movie(&self, connection: &ConnectionConfig, movie_id: u64) -> Result<()> {
        self.command(
            connection,
            "Player.Open",
            json!({ "item": { "movieid": movie_id } }),
        )
        .await
    }
}
