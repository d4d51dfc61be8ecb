//! Phrase classification against the category patterns

use super::patterns::PatternSet;
use super::types::{ClassifiedRequest, RequestType};

/// Classify `phrase` by trying album, artist, movie and song patterns in that
/// order. The first pattern that matches decides the category; if its named
/// capture is absent or blank the phrase is unclassified.
pub fn classify(patterns: &PatternSet, phrase: &str) -> Option<ClassifiedRequest> {
    let (kind, captures) = RequestType::PRIORITY
        .into_iter()
        .find_map(|kind| Some((kind, patterns.get(kind)?.captures(phrase)?)))?;

    let item = captures.name(kind.as_str())?.as_str().trim();
    if item.is_empty() {
        tracing::debug!(category = %kind, "Pattern matched without a usable capture");
        return None;
    }
    Some(ClassifiedRequest {
        item: item.to_string(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternSet {
        PatternSet::from_patterns([
            (RequestType::Album, r"(?i).*\balbum (?P<album>.+)"),
            (RequestType::Artist, r"(?i).*\b(?:music|songs) by (?P<artist>.+)"),
            (RequestType::Movie, r"(?i).*\b(?:movie|film) (?P<movie>.+)"),
            (RequestType::Title, r"(?i).*\bsong (?P<title>.+)"),
        ])
    }

    #[test]
    fn classifies_each_category() {
        let patterns = patterns();
        let cases = [
            ("play the album thriller", "thriller", RequestType::Album),
            ("play music by queen", "queen", RequestType::Artist),
            ("play the movie alien", "alien", RequestType::Movie),
            ("play the song beat it", "beat it", RequestType::Title),
        ];
        for (phrase, item, kind) in cases {
            let request = classify(&patterns, phrase).unwrap();
            assert_eq!(request.item, item, "phrase: {phrase}");
            assert_eq!(request.kind, kind, "phrase: {phrase}");
        }
    }

    #[test]
    fn unmatched_phrase_is_none() {
        assert_eq!(classify(&patterns(), "what is the weather"), None);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        // both phrases satisfy more than one pattern
        let request = classify(&patterns(), "play the song album by nobody").unwrap();
        assert_eq!(request.kind, RequestType::Album);

        let request = classify(&patterns(), "play songs by the movie band").unwrap();
        assert_eq!(request.kind, RequestType::Artist);
    }

    #[test]
    fn missing_category_pattern_falls_through() {
        let patterns = PatternSet::from_patterns([(RequestType::Title, r".*\bsong (?P<title>.+)")]);
        let request = classify(&patterns, "play the song album").unwrap();
        assert_eq!(request.kind, RequestType::Title);
        assert_eq!(request.item, "album");
    }

    #[test]
    fn pattern_without_category_group_yields_nothing() {
        let patterns = PatternSet::from_patterns([(RequestType::Movie, r"watch (?P<film>.+)")]);
        assert_eq!(classify(&patterns, "watch alien"), None);
    }

    #[test]
    fn first_matching_pattern_decides_even_without_capture() {
        let patterns = PatternSet::from_patterns([
            (RequestType::Album, r".*\balbum(?: (?P<album>.+))?"),
            (RequestType::Title, r".*\b(?P<title>album)"),
        ]);
        assert_eq!(classify(&patterns, "play album"), None);
        assert_eq!(
            classify(&patterns, "play album bad").map(|request| request.kind),
            Some(RequestType::Album)
        );
    }
}
