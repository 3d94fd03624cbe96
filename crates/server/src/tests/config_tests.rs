use super::{load_settings_from, normalize_base_url, Settings};

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_from(None, env_from(&[]));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.upstream_timeout().as_secs(), 10);
}

#[test]
fn file_values_override_defaults() {
    let file = r#"
bind_addr = "0.0.0.0:9000"
swapi_url = "http://localhost:7000/api/"
upstream_timeout_seconds = 3
"#;
    let settings = load_settings_from(Some(file), env_from(&[]));
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.swapi_url, "http://localhost:7000/api");
    assert_eq!(settings.upstream_timeout_seconds, 3);
}

#[test]
fn env_overrides_file_and_prefixed_env_wins() {
    let file = r#"bind_addr = "0.0.0.0:9000""#;
    let settings = load_settings_from(
        Some(file),
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:1111"),
            ("APP__BIND_ADDR", "127.0.0.1:2222"),
            ("SWAPI_URL", "http://swapi.local/api"),
            ("APP__UPSTREAM_TIMEOUT_SECONDS", "25"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2222");
    assert_eq!(settings.swapi_url, "http://swapi.local/api");
    assert_eq!(settings.upstream_timeout_seconds, 25);
}

#[test]
fn malformed_file_and_values_are_ignored() {
    let settings = load_settings_from(
        Some("this is = = not toml"),
        env_from(&[("APP__UPSTREAM_TIMEOUT_SECONDS", "soon")]),
    );
    assert_eq!(settings, Settings::default());

    let negative = load_settings_from(Some("upstream_timeout_seconds = -4"), env_from(&[]));
    assert_eq!(negative.upstream_timeout_seconds, 10);
}

#[test]
fn zero_timeout_is_clamped_to_one_second() {
    let settings = load_settings_from(Some("upstream_timeout_seconds = 0"), env_from(&[]));
    assert_eq!(settings.upstream_timeout().as_secs(), 1);
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), Settings::default().swapi_url);
    assert_eq!(
        normalize_base_url(" https://swapi.dev/api// "),
        "https://swapi.dev/api"
    );
}

#[test]
fn static_dir_comes_from_file_then_env() {
    assert_eq!(
        Settings::default().static_dir.as_deref(),
        Some("static")
    );

    let from_file = load_settings_from(Some(r#"static_dir = "public""#), env_from(&[]));
    assert_eq!(from_file.static_dir.as_deref(), Some("public"));

    let from_env = load_settings_from(
        Some(r#"static_dir = "public""#),
        env_from(&[("STATIC_DIR", "web"), ("APP__STATIC_DIR", "/srv/films")]),
    );
    assert_eq!(from_env.static_dir.as_deref(), Some("/srv/films"));
}

#[test]
fn blank_static_dir_disables_static_files() {
    let settings = load_settings_from(None, env_from(&[("APP__STATIC_DIR", "  ")]));
    assert_eq!(settings.static_dir, None);
}
