//! Library records returned by Kodi searches

use serde::{Deserialize, Serialize};

use super::session::ConnectionConfig;

/// A song from the Kodi audio library
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    pub songid: u64,
    pub label: String,
    pub title: String,
    pub artist: Vec<String>,
    pub album: String,
    pub file: String,
    pub thumbnail: String,
}

/// A movie from the Kodi video library
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub movieid: u64,
    pub label: String,
    pub title: String,
    pub year: u32,
    pub file: String,
    pub thumbnail: String,
}

/// Ordered search hits, in the order Kodi returned them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum SearchResults {
    Songs(Vec<Song>),
    Movies(Vec<Movie>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            Self::Songs(songs) => songs.len(),
            Self::Movies(movies) => movies.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewrite `image://` thumbnails as URLs served by the Kodi web server
    pub fn resolve_artwork(&mut self, connection: &ConnectionConfig) {
        let resolve = |thumbnail: &mut String| {
            if !thumbnail.is_empty() {
                *thumbnail = connection.image_url(thumbnail.as_str());
            }
        };
        match self {
            Self::Songs(songs) => songs.iter_mut().for_each(|song| resolve(&mut song.thumbnail)),
            Self::Movies(movies) => movies.iter_mut().for_each(|movie| resolve(&mut movie.thumbnail)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_ignores_unknown_fields_and_defaults_missing_ones() {
        let song: Song = serde_json::from_value(serde_json::json!({
            "songid": 42,
            "label": "Beat It",
            "rating": 5
        }))
        .unwrap();
        assert_eq!(song.songid, 42);
        assert_eq!(song.label, "Beat It");
        assert!(song.artist.is_empty());
    }

    #[test]
    fn results_report_their_length() {
        let results = SearchResults::Movies(vec![Movie::default(), Movie::default()]);
        assert_eq!(results.len(), 2);
        assert!(SearchResults::Songs(Vec::new()).is_empty());
    }

    #[test]
    fn artwork_becomes_web_urls() {
        let connection = ConnectionConfig::from_settings(&crate::settings::Settings {
            kodi_ip: "10.0.0.5".to_string(),
            kodi_user: "kodi".to_string(),
            kodi_pass: "kodi".to_string(),
            ..Default::default()
        })
        .unwrap();
        let mut results = SearchResults::Movies(vec![
            Movie {
                thumbnail: "image://a b/".to_string(),
                ..Movie::default()
            },
            Movie::default(),
        ]);

        results.resolve_artwork(&connection);

        let SearchResults::Movies(movies) = results else {
            unreachable!()
        };
        assert_eq!(movies[0].thumbnail, "http://10.0.0.5:8080/image/image%3A%2F%2Fa%20b%2F");
        assert_eq!(movies[1].thumbnail, "");
    }
}
