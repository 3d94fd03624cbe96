use std::{collections::HashMap, fs, time::Duration};

use serde::Deserialize;
use tracing::warn;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub swapi_url: String,
    pub upstream_timeout_seconds: u64,
    /// Directory holding the browser page and its assets; `None` disables
    /// static file serving.
    pub static_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            swapi_url: "https://swapi.py4e.com/api".into(),
            upstream_timeout_seconds: 10,
            static_dir: Some("static".into()),
        }
    }
}

impl Settings {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds.max(1))
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then `server.toml` keys, then environment variables; later
/// sources win.
pub fn load_settings_from(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, toml::Value>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
                    settings.server_bind = v.to_string();
                }
                if let Some(v) = file_cfg.get("swapi_url").and_then(toml::Value::as_str) {
                    settings.swapi_url = v.to_string();
                }
                if let Some(v) = file_cfg
                    .get("upstream_timeout_seconds")
                    .and_then(toml::Value::as_integer)
                {
                    match u64::try_from(v) {
                        Ok(v) => settings.upstream_timeout_seconds = v,
                        Err(_) => warn!(value = v, "ignoring negative upstream_timeout_seconds"),
                    }
                }
                if let Some(v) = file_cfg.get("static_dir").and_then(toml::Value::as_str) {
                    settings.static_dir = Some(v.to_string());
                }
            }
            Err(error) => warn!(%error, file = SETTINGS_FILE, "ignoring unparseable settings file"),
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("SWAPI_URL") {
        settings.swapi_url = v;
    }
    if let Some(v) = env("APP__SWAPI_URL") {
        settings.swapi_url = v;
    }

    if let Some(v) = env("APP__UPSTREAM_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.upstream_timeout_seconds = parsed;
        }
    }

    if let Some(v) = env("STATIC_DIR") {
        settings.static_dir = Some(v);
    }
    if let Some(v) = env("APP__STATIC_DIR") {
        settings.static_dir = Some(v);
    }

    settings.swapi_url = normalize_base_url(&settings.swapi_url);
    settings.static_dir = settings
        .static_dir
        .map(|dir| dir.trim().to_string())
        .filter(|dir| !dir.is_empty());
    settings
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Settings::default().swapi_url;
    }
    trimmed.to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
