use serde::{Deserialize, Serialize};

use crate::domain::{EpisodeId, Movie};

/// Film body as it arrives over the wire.
///
/// The film endpoint has shipped both camelCase and snake_case spellings, and
/// the upstream catalog uses snake_case only, so both are captured and merged
/// once in [`FilmPayload::into_movie`]. The camelCase spelling wins when a body
/// carries both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilmPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "episodeId", skip_serializing_if = "Option::is_none")]
    pub episode_id_camel: Option<i64>,
    #[serde(default, rename = "episode_id", skip_serializing_if = "Option::is_none")]
    pub episode_id_snake: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, rename = "releaseDate", skip_serializing_if = "Option::is_none")]
    pub release_date_camel: Option<String>,
    #[serde(default, rename = "release_date", skip_serializing_if = "Option::is_none")]
    pub release_date_snake: Option<String>,
    #[serde(default, rename = "openingCrawl", skip_serializing_if = "Option::is_none")]
    pub opening_crawl_camel: Option<String>,
    #[serde(default, rename = "opening_crawl", skip_serializing_if = "Option::is_none")]
    pub opening_crawl_snake: Option<String>,
    /// Application-level failure reported inside an otherwise parseable body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FilmPayload {
    /// Episode number regardless of spelling, camelCase first.
    pub fn episode_number(&self) -> Option<i64> {
        self.episode_id_camel.or(self.episode_id_snake)
    }

    pub fn into_movie(self) -> Movie {
        // An episode number outside the served range is treated as missing.
        let episode_id = self.episode_number().and_then(EpisodeId::new);
        Movie {
            title: non_blank(self.title),
            episode_id,
            director: non_blank(self.director),
            producer: non_blank(self.producer),
            release_date: prefer(self.release_date_camel, self.release_date_snake),
            opening_crawl: prefer(self.opening_crawl_camel, self.opening_crawl_snake),
        }
    }
}

fn prefer(camel: Option<String>, snake: Option<String>) -> Option<String> {
    non_blank(camel).or_else(|| non_blank(snake))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(value: serde_json::Value) -> FilmPayload {
        serde_json::from_value(value).expect("payload")
    }

    #[test]
    fn normalizes_camel_case_body() {
        let movie = payload(serde_json::json!({
            "title": "A New Hope",
            "episodeId": 4,
            "director": "George Lucas",
            "producer": "Gary Kurtz, Rick McCallum",
            "releaseDate": "1977-05-25",
            "openingCrawl": "It is a period of civil war...",
        }))
        .into_movie();

        assert_eq!(movie.title.as_deref(), Some("A New Hope"));
        assert_eq!(movie.episode_id, Some(EpisodeId(4)));
        assert_eq!(movie.release_date.as_deref(), Some("1977-05-25"));
        assert_eq!(
            movie.opening_crawl.as_deref(),
            Some("It is a period of civil war...")
        );
    }

    #[test]
    fn normalizes_snake_case_body() {
        let movie = payload(serde_json::json!({
            "title": "The Empire Strikes Back",
            "episode_id": 5,
            "release_date": "1980-05-17",
            "opening_crawl": "It is a dark time for the Rebellion.",
        }))
        .into_movie();

        assert_eq!(movie.episode_id, Some(EpisodeId(5)));
        assert_eq!(movie.release_date.as_deref(), Some("1980-05-17"));
        assert!(movie.director.is_none());
    }

    #[test]
    fn camel_case_wins_when_both_spellings_are_present() {
        let movie = payload(serde_json::json!({
            "episodeId": 6,
            "episode_id": 2,
            "releaseDate": "1983-05-25",
            "release_date": "2002-05-16",
            "openingCrawl": "",
            "opening_crawl": "Luke Skywalker has returned",
        }))
        .into_movie();

        assert_eq!(movie.episode_id, Some(EpisodeId(6)));
        assert_eq!(movie.release_date.as_deref(), Some("1983-05-25"));
        // A blank camelCase value does not shadow a usable snake_case one.
        assert_eq!(
            movie.opening_crawl.as_deref(),
            Some("Luke Skywalker has returned")
        );
    }

    #[test]
    fn out_of_range_episode_number_is_dropped() {
        let movie = payload(serde_json::json!({
            "title": "Holiday Special",
            "episodeId": 42,
        }))
        .into_movie();

        assert_eq!(movie.episode_id, None);
        assert_eq!(movie.title.as_deref(), Some("Holiday Special"));
    }

    #[test]
    fn error_body_is_captured_and_yields_empty_movie() {
        let body = payload(serde_json::json!({ "error": "not found" }));
        assert_eq!(body.error.as_deref(), Some("not found"));
        assert!(body.into_movie().is_empty());
    }
}
