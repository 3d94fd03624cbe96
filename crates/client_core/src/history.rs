//! Session-scoped record of films fetched successfully.

use shared::domain::Movie;

/// Ordered, append-only list of fetched films.
///
/// Every successful fetch is appended, including repeats of an episode that is
/// already present. Nothing is persisted; the list lives as long as its owner.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Movie>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, movie: Movie) {
        self.entries.push(movie);
    }

    pub fn entries(&self) -> &[Movie] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
