use axum::http::StatusCode;
use shared::{
    domain::{EpisodeId, EpisodeIdError, Movie},
    error::ApiError,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::catalog::{CatalogError, FilmCatalog};

pub fn film_route() -> &'static str {
    "/api/film/:id"
}

/// Failures of a film lookup. `Display` is the message returned to callers in
/// the `error` field.
#[derive(Debug, Error)]
pub enum FilmLookupError {
    #[error("El ID de la película no puede estar vacío")]
    EmptyId,
    #[error("El ID de la película debe ser un número válido")]
    InvalidId,
    #[error("El ID de la película debe estar entre {min} y {max}", min = EpisodeId::MIN, max = EpisodeId::MAX)]
    OutOfRange,
    #[error("Película no encontrada")]
    NotFound,
    #[error("Error al obtener la información de la película")]
    Upstream(#[source] CatalogError),
}

impl FilmLookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FilmLookupError::EmptyId | FilmLookupError::InvalidId | FilmLookupError::OutOfRange => {
                StatusCode::BAD_REQUEST
            }
            FilmLookupError::NotFound => StatusCode::NOT_FOUND,
            FilmLookupError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<&FilmLookupError> for ApiError {
    fn from(value: &FilmLookupError) -> Self {
        ApiError::new(value.to_string())
    }
}

impl From<EpisodeIdError> for FilmLookupError {
    fn from(value: EpisodeIdError) -> Self {
        match value {
            EpisodeIdError::Empty => FilmLookupError::EmptyId,
            EpisodeIdError::NotANumber(_) => FilmLookupError::InvalidId,
            EpisodeIdError::OutOfRange(_) => FilmLookupError::OutOfRange,
        }
    }
}

pub async fn lookup_film(catalog: &dyn FilmCatalog, raw_id: &str) -> Result<Movie, FilmLookupError> {
    let id = EpisodeId::parse(raw_id).map_err(|err| {
        info!(raw_id, %err, "film: rejected id");
        FilmLookupError::from(err)
    })?;

    match catalog.film_by_episode(id).await {
        Ok(movie) => Ok(movie),
        Err(CatalogError::NotFound(_)) => {
            warn!(episode_id = id.0, "film: not found in catalog");
            Err(FilmLookupError::NotFound)
        }
        Err(err) => {
            error!(episode_id = id.0, error = %err, "film: catalog lookup failed");
            Err(FilmLookupError::Upstream(err))
        }
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
