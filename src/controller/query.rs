//! Phrase matching and library search

use crate::error::{Result, SkillError};
use crate::model::{
    classify, ConnectionConfig, MatchDecision, MatchLevel, MatchPayload, MediaCenter, RequestType,
    SearchResults,
};

use super::{KodiSkill, SkillReply};

/// Run the search matching `kind`: movies go to the video library, albums,
/// artists and titles to the audio library filtered on that field.
pub async fn search<M: MediaCenter + ?Sized>(
    api: &M,
    connection: &ConnectionConfig,
    item: &str,
    kind: RequestType,
) -> Result<SearchResults> {
    match kind {
        RequestType::Movie => Ok(SearchResults::Movies(api.search_movies(connection, item).await?)),
        RequestType::Album | RequestType::Artist | RequestType::Title => Ok(SearchResults::Songs(
            api.search_music(connection, item, kind).await?,
        )),
    }
}

impl<M: MediaCenter> KodiSkill<M> {
    pub(crate) async fn match_query(&mut self, phrase: String) -> Result<SkillReply> {
        tracing::info!(phrase = %phrase, "Received play query");

        let Some(request) = classify(&self.patterns, &phrase) else {
            tracing::info!("Phrase matched no request pattern");
            return Ok(SkillReply::NoMatch { phrase });
        };
        tracing::info!(item = %request.item, kind = %request.kind, "Requested search");

        let connection = self.session.connection().ok_or(SkillError::NotConfigured)?;
        let mut library = search(&self.api, connection, &request.item, request.kind).await?;

        if library.is_empty() {
            tracing::info!(item = %request.item, "Found nothing");
            return Ok(SkillReply::NoMatch { phrase });
        }

        library.resolve_artwork(connection);
        tracing::info!(count = library.len(), "Searching Kodi found a matching playable item");
        Ok(SkillReply::Match(MatchDecision {
            phrase,
            level: MatchLevel::Exact,
            payload: MatchPayload {
                library,
                request: request.item,
                kind: request.kind,
            },
        }))
    }
}
