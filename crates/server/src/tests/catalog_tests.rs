use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};
use tokio::net::TcpListener;

async fn spawn_upstream(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/api")
}

fn swapi_listing() -> serde_json::Value {
    serde_json::json!({
        "count": 2,
        "results": [
            {
                "title": "A New Hope",
                "episode_id": 4,
                "opening_crawl": "It is a period of civil war.",
                "director": "George Lucas",
                "producer": "Gary Kurtz, Rick McCallum",
                "release_date": "1977-05-25",
                "url": "https://swapi.py4e.com/api/films/1/"
            },
            {
                "title": "The Force Awakens",
                "episode_id": 7,
                "opening_crawl": "Luke Skywalker has vanished.",
                "director": "J. J. Abrams",
                "producer": "Kathleen Kennedy, J. J. Abrams, Bryan Burk",
                "release_date": "2015-12-11"
            }
        ]
    })
}

fn catalog(base_url: &str) -> SwapiCatalog {
    SwapiCatalog::new(base_url, Duration::from_secs(5)).expect("catalog")
}

#[test]
fn films_url_is_built_from_base() {
    let catalog = catalog("https://swapi.py4e.com/api/");
    assert_eq!(catalog.films_url(), "https://swapi.py4e.com/api/films/");
}

#[tokio::test]
async fn finds_film_by_episode_id() {
    let app = Router::new().route("/api/films/", get(|| async { Json(swapi_listing()) }));
    let base_url = spawn_upstream(app).await;

    let movie = catalog(&base_url)
        .film_by_episode(EpisodeId(7))
        .await
        .expect("film");
    assert_eq!(movie.title.as_deref(), Some("The Force Awakens"));
    assert_eq!(movie.episode_id, Some(EpisodeId(7)));
    assert_eq!(movie.release_date.as_deref(), Some("2015-12-11"));
}

#[tokio::test]
async fn missing_episode_is_not_found() {
    let app = Router::new().route("/api/films/", get(|| async { Json(swapi_listing()) }));
    let base_url = spawn_upstream(app).await;

    let err = catalog(&base_url)
        .film_by_episode(EpisodeId(2))
        .await
        .expect_err("must fail");
    assert!(matches!(err, CatalogError::NotFound(EpisodeId(2))));
}

#[tokio::test]
async fn upstream_failure_status_is_reported() {
    let app = Router::new().route(
        "/api/films/",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base_url = spawn_upstream(app).await;

    let err = catalog(&base_url)
        .film_by_episode(EpisodeId(4))
        .await
        .expect_err("must fail");
    assert!(matches!(err, CatalogError::UpstreamStatus(503)));
}

#[tokio::test]
async fn listing_without_results_is_malformed() {
    let app = Router::new().route(
        "/api/films/",
        get(|| async { Json(serde_json::json!({ "detail": "Not found" })) }),
    );
    let base_url = spawn_upstream(app).await;

    let err = catalog(&base_url)
        .film_by_episode(EpisodeId(4))
        .await
        .expect_err("must fail");
    assert!(matches!(err, CatalogError::Malformed(_)));
}
