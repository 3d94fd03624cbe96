use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EpisodeId);

impl EpisodeId {
    /// Lowest episode the film catalog serves.
    pub const MIN: i64 = 1;
    /// Highest episode the film catalog serves.
    pub const MAX: i64 = 7;

    /// Returns `None` when `value` falls outside `MIN..=MAX`.
    pub fn new(value: i64) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn parse(raw: &str) -> Result<Self, EpisodeIdError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(EpisodeIdError::Empty);
        }
        let value = raw
            .parse::<i64>()
            .map_err(|_| EpisodeIdError::NotANumber(raw.to_string()))?;
        Self::new(value).ok_or(EpisodeIdError::OutOfRange(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EpisodeIdError {
    #[error("episode id is empty")]
    Empty,
    #[error("episode id '{0}' is not a base-10 integer")]
    NotANumber(String),
    #[error("episode id {0} is outside {min}..={max}", min = EpisodeId::MIN, max = EpisodeId::MAX)]
    OutOfRange(i64),
}

/// Canonical film record. Every attribute may be missing; renderers substitute
/// a placeholder for absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<EpisodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_crawl: Option<String>,
}

impl Movie {
    /// True when not a single attribute survived normalization.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.episode_id.is_none()
            && self.director.is_none()
            && self.producer.is_none()
            && self.release_date.is_none()
            && self.opening_crawl.is_none()
    }
}
