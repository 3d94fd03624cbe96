//! User-facing strings for each supported display language.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "spanish")]
    Es,
    #[serde(alias = "english")]
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Es => &SPANISH,
            Locale::En => &ENGLISH,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "es" | "es-es" | "spanish" => Ok(Locale::Es),
            "en" | "en-us" | "english" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}' (expected 'es' or 'en')")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Es => f.write_str("es"),
            Locale::En => f.write_str("en"),
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    pub episode: &'static str,
    pub director: &'static str,
    pub producer: &'static str,
    pub release_date: &'static str,
    pub opening_crawl: &'static str,
    /// Shown in place of any missing or blank film attribute.
    pub placeholder: &'static str,
    pub loading: &'static str,
    pub error_label: &'static str,
    pub retry_hint: &'static str,
    pub empty_input: &'static str,
    pub out_of_range: &'static str,
    pub remote_fallback: &'static str,
    pub network_failure: &'static str,
    pub history_empty: &'static str,
    record: &'static str,
    months: [&'static str; 12],
    date_order: DateOrder,
}

#[derive(Debug, Clone, Copy)]
enum DateOrder {
    /// `25 de mayo de 1977`
    DayMonthYear,
    /// `May 25, 1977`
    MonthDayYear,
}

impl Labels {
    pub fn record_label(&self, position: usize) -> String {
        format!("{} {position}", self.record)
    }

    /// Long-form rendering of an ISO `YYYY-MM-DD` date, `None` when `raw` is
    /// not in that shape.
    pub fn long_date(&self, raw: &str) -> Option<String> {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
        let month = self.months[date.month0() as usize];
        Some(match self.date_order {
            DateOrder::DayMonthYear => format!("{} de {month} de {}", date.day(), date.year()),
            DateOrder::MonthDayYear => format!("{month} {}, {}", date.day(), date.year()),
        })
    }
}

static SPANISH: Labels = Labels {
    episode: "Episodio",
    director: "Director",
    producer: "Productor",
    release_date: "Fecha de estreno",
    opening_crawl: "Introducción",
    placeholder: "No disponible",
    loading: "Buscando película...",
    error_label: "Error",
    retry_hint: "Por favor intente de nuevo más tarde.",
    empty_input: "Por favor ingrese un número de película",
    out_of_range: "Por favor ingrese un número válido entre 1 y 7",
    remote_fallback: "No se pudo obtener la información de la película.",
    network_failure: "Error de conexión: no se pudo contactar al servidor.",
    history_empty: "Aún no se ha consultado ninguna película.",
    record: "Película",
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    date_order: DateOrder::DayMonthYear,
};

static ENGLISH: Labels = Labels {
    episode: "Episode",
    director: "Director",
    producer: "Producer",
    release_date: "Release date",
    opening_crawl: "Opening crawl",
    placeholder: "Not available",
    loading: "Searching for film...",
    error_label: "Error",
    retry_hint: "Please try again later.",
    empty_input: "Please enter a film number",
    out_of_range: "Please enter a valid number between 1 and 7",
    remote_fallback: "Could not retrieve the film information.",
    network_failure: "Connection error: the server could not be reached.",
    history_empty: "No films have been consulted yet.",
    record: "Record",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    date_order: DateOrder::MonthDayYear,
};
