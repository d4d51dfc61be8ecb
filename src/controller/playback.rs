//! Queue building and transport commands

use crate::error::{Result, SkillError};
use crate::model::{ConnectionConfig, MatchPayload, MediaCenter, SearchResults, Song};

use super::{KodiSkill, SkillReply};

/// Replace the audio playlist with `songs`, keeping their order.
///
/// Always one clear followed by one add; the add carries every song id, so an
/// empty slice leaves the playlist empty. A failed add is not rolled back.
pub async fn queue<M: MediaCenter + ?Sized>(
    api: &M,
    connection: &ConnectionConfig,
    songs: &[Song],
) -> Result<()> {
    api.playlist_clear(connection).await?;

    let song_ids: Vec<u64> = songs.iter().map(|song| song.songid).collect();
    tracing::info!(song_ids = ?song_ids, "Adding to Kodi playlist");
    api.playlist_add(connection, &song_ids).await
}

#[derive(Clone, Copy, Debug)]
enum Transport {
    Stop,
    Pause,
    Resume,
}

impl<M: MediaCenter> KodiSkill<M> {
    fn connection(&self) -> Result<&ConnectionConfig> {
        self.session.connection().ok_or(SkillError::NotConfigured)
    }

    /// Start playback of a payload previously returned with a match
    pub(crate) async fn start(&mut self, phrase: &str, payload: MatchPayload) -> Result<SkillReply> {
        tracing::info!(
            phrase,
            request = %payload.request,
            kind = %payload.kind,
            count = payload.library.len(),
            "Starting playback"
        );
        let connection = self.connection()?;

        match &payload.library {
            SearchResults::Songs(songs) => {
                queue(&self.api, connection, songs).await?;
                self.api.open_playlist(connection).await?;
            }
            SearchResults::Movies(movies) => match movies.first() {
                Some(movie) => {
                    tracing::info!(movie = %movie.label, movieid = movie.movieid, "Opening movie");
                    self.api.open_movie(connection, movie.movieid).await?;
                }
                None => tracing::warn!("Start called with no movies"),
            },
        }
        Ok(SkillReply::Nothing)
    }

    pub(crate) async fn handle_stop(&mut self) -> Result<SkillReply> {
        self.transport(Transport::Stop).await
    }

    pub(crate) async fn handle_pause(&mut self) -> Result<SkillReply> {
        self.transport(Transport::Pause).await
    }

    pub(crate) async fn handle_resume(&mut self) -> Result<SkillReply> {
        self.transport(Transport::Resume).await
    }

    async fn transport(&mut self, command: Transport) -> Result<SkillReply> {
        let connection = self.connection()?;
        let players = self.api.active_players(connection).await?;
        if players.is_empty() {
            tracing::debug!(command = ?command, "No active player");
        }

        for player_id in players {
            tracing::debug!(command = ?command, player_id, "Sending transport command");
            match command {
                Transport::Stop => self.api.stop(connection, player_id).await?,
                Transport::Pause => self.api.play_pause(connection, player_id, false).await?,
                Transport::Resume => self.api.play_pause(connection, player_id, true).await?,
            }
        }
        Ok(SkillReply::Nothing)
    }
}
