//! # Watch Page Parser
//!
//! This module extracts caption data from a YouTube watch page: the
//! `ytInitialPlayerResponse` script blob lists the available caption tracks,
//! and the timedtext `json3` payload those tracks point at carries the
//! caption lines themselves.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::Error,
    types::{CaptionTrack, Json3Transcript},
};

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?s)<script[^>]*>\s*var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*</script>",
    )
    .unwrap()
});

/// Lists the caption tracks advertised by a player response.
///
/// # Returns
/// * `Ok(Vec<CaptionTrack>)`, empty when the video advertises no captions
///   at all (captions disabled or none uploaded).
/// * `Err(Error)` if a track object cannot be deserialized.
pub fn parse_caption_tracks(json: &Value) -> Result<Vec<CaptionTrack>, Error> {
    let Some(tracks) =
        json["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"].as_array()
    else {
        return Ok(Vec::new());
    };

    tracks
        .iter()
        .map(|track| serde_json::from_value::<CaptionTrack>(track.clone()).map_err(Error::from))
        .collect()
}

/// Flattens a `json3` timedtext payload into ordered caption lines.
///
/// Each event becomes one line by concatenating its segments; events with no
/// segments (styling/window events) and newline-only filler are dropped.
pub fn caption_lines(transcript: &Json3Transcript) -> Vec<String> {
    transcript
        .events
        .iter()
        .filter_map(|event| {
            let segs = event.segs.as_ref()?;
            let line: String = segs.iter().map(|seg| seg.utf8.as_str()).collect();
            let line = line.trim();
            if line.is_empty() {
                None
            } else {
                Some(line.to_string())
            }
        })
        .collect()
}

pub struct PlayerHtmlDocument(String);

impl Deref for PlayerHtmlDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PlayerHtmlDocument {
    pub fn new(doc: String) -> Self {
        PlayerHtmlDocument(doc)
    }

    pub fn to_json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(Error::ParseError(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))
    }
}

impl From<String> for PlayerHtmlDocument {
    fn from(value: String) -> Self {
        PlayerHtmlDocument(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_with_valid_player_response() {
        let html = r#"
            <html>
                <script nonce="gZTn8MILMQFuWon1rDk2VA">
                    var ytInitialPlayerResponse = {"captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [{"baseUrl": "https://www.youtube.com/api/timedtext?v=v1", "languageCode": "en"}]}}};
                </script>
            </html>
        "#;

        let doc = PlayerHtmlDocument::from(html.to_string());
        let json = doc.to_json::<Value>().expect("should extract player JSON");

        let tracks = parse_caption_tracks(&json).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].language_code, "en");
        assert_eq!(
            tracks[0].base_url,
            "https://www.youtube.com/api/timedtext?v=v1"
        );
        assert!(tracks[0].kind.is_none());
    }

    #[test]
    fn test_extraction_with_missing_script() {
        let html = r#"
            <html>
                <body>
                    <p>No ytInitialPlayerResponse here</p>
                </body>
            </html>
        "#;

        let doc = PlayerHtmlDocument::from(html.to_string());
        let result = doc.to_json::<Value>();
        assert!(result.is_err());
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_extraction_with_invalid_json() {
        let html = r#"
            <script nonce="gZTn8MILMQFuWon1rDk2VA">
                var ytInitialPlayerResponse = {invalid: json};
            </script>
        "#;

        let doc = PlayerHtmlDocument::from(html.to_string());
        let result = doc.to_json::<Value>();
        assert!(result.is_err());
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_no_caption_tracks_is_empty_not_error() {
        let json: Value = serde_json::json!({
            "videoDetails": {"videoId": "v1"}
        });

        let tracks = parse_caption_tracks(&json).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_asr_track_kind_is_parsed() {
        let json: Value = serde_json::json!({
            "captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [
                {"baseUrl": "https://example.com/tt?v=v1&kind=asr", "languageCode": "en", "kind": "asr"}
            ]}}
        });

        let tracks = parse_caption_tracks(&json).unwrap();
        assert_eq!(tracks[0].kind.as_deref(), Some("asr"));
    }

    #[test]
    fn test_caption_lines_joins_segments_per_event() {
        let payload = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 100},
                {"segs": [{"utf8": "Hello"}]},
                {"segs": [{"utf8": "wo"}, {"utf8": "rld"}]},
                {"segs": [{"utf8": "\n"}]}
            ]
        }"#;

        let transcript: Json3Transcript = serde_json::from_str(payload).unwrap();
        let lines = caption_lines(&transcript);
        assert_eq!(lines, vec!["Hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_caption_lines_with_no_events() {
        let transcript: Json3Transcript = serde_json::from_str("{}").unwrap();
        assert!(caption_lines(&transcript).is_empty());
    }
}
