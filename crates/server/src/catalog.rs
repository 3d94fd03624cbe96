//! Upstream film catalog the API proxies.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;
use shared::{
    domain::{EpisodeId, Movie},
    protocol::FilmPayload,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("film {0} is not in the catalog")]
    NotFound(EpisodeId),
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog answered with status {0}")]
    UpstreamStatus(u16),
    #[error("catalog response is malformed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait FilmCatalog: Send + Sync {
    async fn film_by_episode(&self, id: EpisodeId) -> Result<Movie, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct FilmListResponse {
    results: Vec<FilmPayload>,
}

/// Catalog backed by the public SWAPI `films` listing, which is searched by
/// `episode_id`.
#[derive(Debug, Clone)]
pub struct SwapiCatalog {
    http: Client,
    films_url: String,
}

impl SwapiCatalog {
    pub fn new(base_url: &str, connect_timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            films_url: format!("{}/films/", base_url.trim_end_matches('/')),
        }
    }

    pub fn films_url(&self) -> &str {
        &self.films_url
    }
}

#[async_trait]
impl FilmCatalog for SwapiCatalog {
    async fn film_by_episode(&self, id: EpisodeId) -> Result<Movie, CatalogError> {
        debug!(url = %self.films_url, episode_id = id.0, "catalog: requesting film list");
        let response = self
            .http
            .get(&self.films_url)
            .query(&[("format", "json")])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let listing: FilmListResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        debug!(films = listing.results.len(), "catalog: film list received");

        let film = listing
            .results
            .into_iter()
            .find(|film| film.episode_number() == Some(id.0))
            .ok_or(CatalogError::NotFound(id))?;
        let movie = film.into_movie();
        info!(episode_id = id.0, title = ?movie.title, "catalog: film found");
        Ok(movie)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
