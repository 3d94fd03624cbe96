//! Network access to the film endpoint.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use shared::{domain::EpisodeId, error::ApiError, protocol::FilmPayload};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered, but with a non-success status or a body that
    /// could not be read as a film.
    #[error("film endpoint answered with status {status:?}: {message:?}")]
    Remote {
        status: Option<u16>,
        message: Option<String>,
    },
    /// The request never completed.
    #[error(transparent)]
    Network(#[from] anyhow::Error),
}

#[async_trait]
pub trait FilmSource: Send + Sync {
    async fn fetch_film(&self, id: EpisodeId) -> Result<FilmPayload, FetchError>;
}

/// [`FilmSource`] backed by `GET {server_url}/api/film/{id}`.
#[derive(Debug, Clone)]
pub struct HttpFilmSource {
    http: Client,
    server_url: Url,
}

impl HttpFilmSource {
    pub fn new(server_url: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Self::with_client(http, server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> anyhow::Result<Self> {
        let server_url = Url::parse(server_url.trim())
            .with_context(|| format!("invalid server url '{server_url}'"))?;
        if server_url.cannot_be_a_base() {
            return Err(anyhow!("server url '{server_url}' cannot carry a path"));
        }
        Ok(Self { http, server_url })
    }

    pub fn film_url(&self, id: EpisodeId) -> Url {
        let mut url = self.server_url.clone();
        let id = id.to_string();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "film", id.as_str()]);
        }
        url
    }
}

#[async_trait]
impl FilmSource for HttpFilmSource {
    async fn fetch_film(&self, id: EpisodeId) -> Result<FilmPayload, FetchError> {
        let url = self.film_url(id);
        debug!(%url, "film: request");
        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read body of GET {url}"))?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&body)
                .ok()
                .map(|body| body.error)
                .filter(|m| !m.trim().is_empty());
            warn!(%url, status = status.as_u16(), ?message, "film: endpoint returned failure status");
            return Err(FetchError::Remote {
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_str::<FilmPayload>(&body).map_err(|error| {
            warn!(%url, %error, "film: response body is not a film payload");
            FetchError::Remote {
                status: Some(status.as_u16()),
                message: None,
            }
        })
    }
}
