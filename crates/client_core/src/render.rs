//! Structured views for the output and history regions.
//!
//! Views hold plain text. Markup is produced only by [`View::to_html`], which
//! escapes every value on the way out, so server-supplied strings are always
//! displayed literally and never parsed as elements.

use std::fmt::{self, Write as _};

use shared::domain::Movie;

use crate::{history::History, locale::Labels};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading(LoadingView),
    Movie(MovieView),
    Error(ErrorView),
    History(HistoryView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieView {
    pub title: FieldValue,
    pub episode: Field,
    pub director: Field,
    pub producer: Field,
    pub release_date: Field,
    pub opening_crawl: Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    /// Machine-readable form kept next to a reformatted date.
    pub datetime: Option<String>,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub label: String,
    pub message: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    Empty(String),
    Records(Vec<HistoryEntry>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub label: String,
    pub movie: MovieView,
}

impl FieldValue {
    fn given(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            datetime: None,
            is_placeholder: false,
        }
    }

    fn from_optional(value: Option<&str>, labels: &Labels) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(text) => Self::given(text),
            None => Self {
                text: labels.placeholder.to_string(),
                datetime: None,
                is_placeholder: true,
            },
        }
    }
}

impl MovieView {
    pub fn fields(&self) -> [&Field; 5] {
        [
            &self.episode,
            &self.director,
            &self.producer,
            &self.release_date,
            &self.opening_crawl,
        ]
    }

    pub fn placeholder_count(&self) -> usize {
        usize::from(self.title.is_placeholder)
            + self
                .fields()
                .iter()
                .filter(|field| field.value.is_placeholder)
                .count()
    }
}

pub fn movie_view(movie: &Movie, labels: &Labels) -> MovieView {
    let episode = movie.episode_id.map(|id| id.to_string());
    let release_date = match movie.release_date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match labels.long_date(raw) {
            Some(long) => FieldValue {
                text: long,
                datetime: Some(raw.to_string()),
                is_placeholder: false,
            },
            None => FieldValue::given(raw),
        },
        _ => FieldValue::from_optional(None, labels),
    };

    MovieView {
        title: FieldValue::from_optional(movie.title.as_deref(), labels),
        episode: field(labels.episode, FieldValue::from_optional(episode.as_deref(), labels)),
        director: field(
            labels.director,
            FieldValue::from_optional(movie.director.as_deref(), labels),
        ),
        producer: field(
            labels.producer,
            FieldValue::from_optional(movie.producer.as_deref(), labels),
        ),
        release_date: field(labels.release_date, release_date),
        opening_crawl: field(
            labels.opening_crawl,
            FieldValue::from_optional(movie.opening_crawl.as_deref(), labels),
        ),
    }
}

fn field(label: &str, value: FieldValue) -> Field {
    Field {
        label: label.to_string(),
        value,
    }
}

pub fn error_view(message: &str, labels: &Labels) -> ErrorView {
    ErrorView {
        label: labels.error_label.to_string(),
        message: message.to_string(),
        hint: labels.retry_hint.to_string(),
    }
}

pub fn loading_view(labels: &Labels) -> LoadingView {
    LoadingView {
        text: labels.loading.to_string(),
    }
}

pub fn history_view(history: &History, labels: &Labels) -> HistoryView {
    if history.is_empty() {
        return HistoryView::Empty(labels.history_empty.to_string());
    }
    HistoryView::Records(
        history
            .iter()
            .enumerate()
            .map(|(index, movie)| HistoryEntry {
                label: labels.record_label(index + 1),
                movie: movie_view(movie, labels),
            })
            .collect(),
    )
}

/// Replaces the five HTML-significant characters with entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl View {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        match self {
            View::Loading(loading) => {
                let _ = write!(
                    out,
                    r#"<div class="loading"><div class="loading-spinner"></div><p>{}</p></div>"#,
                    escape_html(&loading.text)
                );
            }
            View::Movie(movie) => write_movie_html(&mut out, movie, "h2"),
            View::Error(error) => {
                let _ = write!(
                    out,
                    r#"<div class="error-message"><p><strong>{}:</strong> {}</p><p class="retry-hint">{}</p></div>"#,
                    escape_html(&error.label),
                    escape_html(&error.message),
                    escape_html(&error.hint)
                );
            }
            View::History(HistoryView::Empty(text)) => {
                let _ = write!(
                    out,
                    r#"<p class="history-empty">{}</p>"#,
                    escape_html(text)
                );
            }
            View::History(HistoryView::Records(entries)) => {
                out.push_str(r#"<div class="history">"#);
                for entry in entries {
                    let _ = write!(
                        out,
                        r#"<section class="history-entry"><h3 class="history-label">{}</h3>"#,
                        escape_html(&entry.label)
                    );
                    write_movie_html(&mut out, &entry.movie, "h4");
                    out.push_str("</section>");
                }
                out.push_str("</div>");
            }
        }
        out
    }
}

fn write_movie_html(out: &mut String, movie: &MovieView, heading: &str) {
    let _ = write!(
        out,
        r#"<div class="movie-info"><{heading} class="movie-title">{}</{heading}><div class="movie-meta">"#,
        escape_html(&movie.title.text)
    );
    for field in [
        &movie.episode,
        &movie.director,
        &movie.producer,
        &movie.release_date,
    ] {
        out.push_str("<p>");
        write_label_html(out, field);
        out.push(' ');
        write_value_html(out, &field.value);
        out.push_str("</p>");
    }
    out.push_str(r#"</div><div class="movie-description"><p>"#);
    write_label_html(out, &movie.opening_crawl);
    out.push_str(r#"</p><p class="opening-crawl">"#);
    write_value_html(out, &movie.opening_crawl.value);
    out.push_str("</p></div></div>");
}

fn write_label_html(out: &mut String, field: &Field) {
    let _ = write!(out, "<strong>{}:</strong>", escape_html(&field.label));
}

fn write_value_html(out: &mut String, value: &FieldValue) {
    match (&value.datetime, value.is_placeholder) {
        (Some(datetime), _) => {
            let _ = write!(
                out,
                r#"<time datetime="{}">{}</time>"#,
                escape_html(datetime),
                escape_html(&value.text)
            );
        }
        (None, true) => {
            let _ = write!(
                out,
                r#"<span class="placeholder">{}</span>"#,
                escape_html(&value.text)
            );
        }
        (None, false) => out.push_str(&escape_html(&value.text)),
    }
}

/// Terminal counterpart of [`escape_html`]: control characters (ANSI escape
/// sequences included) are replaced so they cannot drive the terminal. Line
/// breaks and tabs survive, with `\r\n` folded into `\n`.
struct Plain<'a>(&'a str);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\t' => f.write_char(ch)?,
                ch if ch.is_control() => f.write_char('\u{fffd}')?,
                ch => f.write_char(ch)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for MovieView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Plain(&self.title.text))?;
        for field in self.fields() {
            writeln!(f, "  {}: {}", Plain(&field.label), Plain(&field.value.text))?;
        }
        Ok(())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading(loading) => writeln!(f, "{}", Plain(&loading.text)),
            View::Movie(movie) => fmt::Display::fmt(movie, f),
            View::Error(error) => {
                writeln!(f, "{}: {}", Plain(&error.label), Plain(&error.message))?;
                writeln!(f, "{}", Plain(&error.hint))
            }
            View::History(HistoryView::Empty(text)) => writeln!(f, "{}", Plain(text)),
            View::History(HistoryView::Records(entries)) => {
                for entry in entries {
                    writeln!(f, "[{}]", Plain(&entry.label))?;
                    fmt::Display::fmt(&entry.movie, f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
