use std::{fs, str::FromStr};

use client_core::Locale;
use serde::Deserialize;
use tracing::warn;

const SETTINGS_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub locale: Locale,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    locale: Option<Locale>,
}

pub fn load_settings() -> ClientSettings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `client.toml`, then `APP__*` environment variables.
/// Command-line flags are applied on top by the caller.
pub fn load_settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.server_url {
                    settings.server_url = v;
                }
                if let Some(v) = file_cfg.locale {
                    settings.locale = v;
                }
            }
            Err(error) => warn!(%error, file = SETTINGS_FILE, "ignoring unparseable settings file"),
        }
    }

    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__LOCALE") {
        match Locale::from_str(&v) {
            Ok(locale) => settings.locale = locale,
            Err(error) => warn!(%error, "ignoring APP__LOCALE"),
        }
    }

    settings
}
