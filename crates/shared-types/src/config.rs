use serde::{Deserialize, Serialize};

/// Latency simulated by the deferred login when no config overrides it.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

fn default_true() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

/// Client-visible switches controlling optional presentation.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalFlags {
    /// Show the demo credential hint under the login form.
    #[serde(default = "default_true")]
    pub demo_credentials: bool,
    /// Start in dark mode.
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

impl Default for PortalFlags {
    fn default() -> Self {
        Self {
            demo_credentials: true,
            dark_mode: true,
        }
    }
}

/// Settings for the deferred login operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl LoginConfig {
    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub features: PortalFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_hint_in_dark_mode_with_one_second_delay() {
        let config = AppConfig::default();
        assert!(config.features.demo_credentials);
        assert!(config.features.dark_mode);
        assert_eq!(config.login.delay_ms, 1000);
        assert_eq!(config.login.delay(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            dark_mode = false
            "#,
        )
        .unwrap();
        assert!(!config.features.dark_mode);
        assert!(config.features.demo_credentials);
        assert_eq!(config.login, LoginConfig::default());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [login]
            delay_ms = 250

            [features]
            demo_credentials = false
            dark_mode = false
            "#,
        )
        .unwrap();
        assert_eq!(config.login.delay_ms, 250);
        assert!(!config.features.demo_credentials);
        assert!(!config.features.dark_mode);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: PortalFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, PortalFlags::default());
    }
}
