//! Film lookup client: validates a film number, fetches the film from the
//! backend, renders it into a page, and keeps the session's lookup history.

use shared::domain::{EpisodeId, EpisodeIdError, Movie};
use thiserror::Error;
use tracing::{error, info, warn};

pub mod history;
pub mod locale;
pub mod page;
pub mod render;
pub mod transport;

pub use history::History;
pub use locale::{Labels, Locale};
pub use page::{MemoryPage, Page, PageUpdate};
pub use render::{escape_html, View};
pub use transport::{FetchError, FilmSource, HttpFilmSource};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no film number was entered")]
    EmptyInput,
    #[error("'{input}' is not a film number between {min} and {max}", min = EpisodeId::MIN, max = EpisodeId::MAX)]
    OutOfRange { input: String },
    #[error("film endpoint reported a failure (status {status:?}): {message:?}")]
    RemoteError {
        status: Option<u16>,
        message: Option<String>,
    },
    #[error(transparent)]
    NetworkError(anyhow::Error),
}

impl SearchError {
    /// Text shown to the user. Server-supplied messages pass through as plain
    /// text; transport details never do.
    pub fn user_message(&self, labels: &Labels) -> String {
        match self {
            SearchError::EmptyInput => labels.empty_input.to_string(),
            SearchError::OutOfRange { .. } => labels.out_of_range.to_string(),
            SearchError::RemoteError { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(labels.remote_fallback)
                .to_string(),
            SearchError::NetworkError(_) => labels.network_failure.to_string(),
        }
    }

    /// Validation failures are raised before any request is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SearchError::EmptyInput | SearchError::OutOfRange { .. }
        )
    }
}

impl From<FetchError> for SearchError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::Remote { status, message } => SearchError::RemoteError { status, message },
            FetchError::Network(error) => SearchError::NetworkError(error),
        }
    }
}

pub fn validate_input(raw: &str) -> Result<EpisodeId, SearchError> {
    EpisodeId::parse(raw).map_err(|err| match err {
        EpisodeIdError::Empty => SearchError::EmptyInput,
        EpisodeIdError::NotANumber(_) | EpisodeIdError::OutOfRange(_) => SearchError::OutOfRange {
            input: raw.trim().to_string(),
        },
    })
}

/// Owns the session state behind one page: the film source, the display
/// language and the lookup history.
pub struct SearchController<S: FilmSource> {
    source: S,
    locale: Locale,
    history: History,
}

impl<S: FilmSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self::with_locale(source, Locale::default())
    }

    pub fn with_locale(source: S, locale: Locale) -> Self {
        Self {
            source,
            locale,
            history: History::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs one search for the page's current input.
    ///
    /// Validation failures render inline and never reach the network. Once a
    /// request is issued the controls stay disabled until it settles and are
    /// re-enabled whatever the outcome.
    pub async fn submit<P: Page + ?Sized>(&mut self, page: &mut P) -> Result<Movie, SearchError> {
        let raw = page.input_value();
        let id = match validate_input(&raw) {
            Ok(id) => id,
            Err(err) => {
                info!(input = %raw.trim(), %err, "search: input rejected");
                self.show_error(page, &err);
                return Err(err);
            }
        };

        page.set_controls_enabled(false);
        page.show_output(View::Loading(render::loading_view(self.labels())));

        let outcome = self.fetch(id).await;
        match &outcome {
            Ok(movie) => {
                page.show_output(View::Movie(render::movie_view(movie, self.labels())));
                self.history.push(movie.clone());
                page.clear_input();
                info!(
                    episode_id = id.0,
                    history_len = self.history.len(),
                    "search: film rendered"
                );
            }
            Err(err) => self.show_error(page, err),
        }

        page.set_controls_enabled(true);
        outcome
    }

    /// Renders the current history into the page's history region.
    pub fn show_history<P: Page + ?Sized>(&self, page: &mut P) {
        page.show_history(View::History(render::history_view(
            &self.history,
            self.labels(),
        )));
    }

    async fn fetch(&self, id: EpisodeId) -> Result<Movie, SearchError> {
        let payload = match self.source.fetch_film(id).await {
            Ok(payload) => payload,
            Err(FetchError::Network(err)) => {
                error!(episode_id = id.0, error = %format!("{err:#}"), "search: film request failed");
                return Err(SearchError::NetworkError(err));
            }
            Err(err) => {
                warn!(episode_id = id.0, %err, "search: film endpoint reported failure");
                return Err(err.into());
            }
        };

        if let Some(message) = payload.error.as_deref().filter(|m| !m.trim().is_empty()) {
            warn!(episode_id = id.0, %message, "search: film body carries an error");
            return Err(SearchError::RemoteError {
                status: None,
                message: Some(message.to_string()),
            });
        }

        let movie = payload.into_movie();
        if movie.is_empty() {
            warn!(episode_id = id.0, "search: film body has no usable fields");
            return Err(SearchError::RemoteError {
                status: None,
                message: None,
            });
        }
        Ok(movie)
    }

    fn show_error<P: Page + ?Sized>(&self, page: &mut P, err: &SearchError) {
        let message = err.user_message(self.labels());
        page.show_output(View::Error(render::error_view(&message, self.labels())));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
