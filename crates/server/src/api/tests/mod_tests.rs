use super::*;
use async_trait::async_trait;

struct OneFilmCatalog;

#[async_trait]
impl FilmCatalog for OneFilmCatalog {
    async fn film_by_episode(&self, id: EpisodeId) -> Result<Movie, CatalogError> {
        if id != EpisodeId(4) {
            return Err(CatalogError::NotFound(id));
        }
        Ok(Movie {
            title: Some("A New Hope".into()),
            episode_id: Some(id),
            ..Movie::default()
        })
    }
}

struct BrokenCatalog;

#[async_trait]
impl FilmCatalog for BrokenCatalog {
    async fn film_by_episode(&self, _id: EpisodeId) -> Result<Movie, CatalogError> {
        Err(CatalogError::UpstreamStatus(500))
    }
}

#[tokio::test]
async fn valid_id_returns_catalog_film() {
    let movie = lookup_film(&OneFilmCatalog, " 4 ").await.expect("film");
    assert_eq!(movie.title.as_deref(), Some("A New Hope"));
}

#[tokio::test]
async fn invalid_ids_are_rejected_before_catalog_lookup() {
    let err = lookup_film(&BrokenCatalog, "").await.expect_err("empty");
    assert!(matches!(err, FilmLookupError::EmptyId));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

    let err = lookup_film(&BrokenCatalog, "cuatro").await.expect_err("nan");
    assert!(matches!(err, FilmLookupError::InvalidId));

    let err = lookup_film(&BrokenCatalog, "8").await.expect_err("range");
    assert!(matches!(err, FilmLookupError::OutOfRange));
    assert_eq!(
        err.to_string(),
        "El ID de la película debe estar entre 1 y 7"
    );
}

#[tokio::test]
async fn missing_film_maps_to_not_found() {
    let err = lookup_film(&OneFilmCatalog, "2").await.expect_err("missing");
    assert!(matches!(err, FilmLookupError::NotFound));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::from(&err).error, "Película no encontrada");
}

#[tokio::test]
async fn catalog_failure_maps_to_bad_gateway_without_leaking_details() {
    let err = lookup_film(&BrokenCatalog, "4").await.expect_err("upstream");
    assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        ApiError::from(&err).error,
        "Error al obtener la información de la película"
    );
}
