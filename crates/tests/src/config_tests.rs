use std::time::Duration;

use pretty_assertions::assert_eq;
use server::config::parse_config;
use shared_types::{AppConfig, DEFAULT_LOGIN_DELAY_MS};

#[test]
fn full_file_overrides_defaults() {
    let config = parse_config(
        r#"
        [login]
        delay_ms = 250

        [features]
        demo_credentials = false
        dark_mode = false
        "#,
    );

    assert_eq!(config.login.delay(), Duration::from_millis(250));
    assert!(!config.features.demo_credentials);
    assert!(!config.features.dark_mode);
}

#[test]
fn empty_file_uses_defaults() {
    let config = parse_config("");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.login.delay_ms, DEFAULT_LOGIN_DELAY_MS);
}

#[test]
fn malformed_file_uses_defaults() {
    assert_eq!(parse_config("[login\ndelay_ms = "), AppConfig::default());
}
