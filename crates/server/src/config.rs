use shared_types::{AppConfig, LoginConfig, PortalFlags, DEFAULT_LOGIN_DELAY_MS};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Config file read when `PORTAL_CONFIG` is unset, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "PORTAL_CONFIG";

/// Resolve the config file location from the environment.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Parse config text. Unparseable input yields defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse portal config, using defaults");
        AppConfig::default()
    })
}

/// Read and parse the file at `path`. A missing file yields defaults.
pub fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "portal config not readable, using defaults");
            AppConfig::default()
        }
    }
}

/// Load `.env`, then the config file, into the global `OnceLock`.
/// Only the first call has effect.
pub fn load_config() {
    let _ = dotenvy::dotenv();
    let config = CONFIG.get_or_init(|| read_config(&config_path()));
    tracing::info!(
        delay_ms = config.login.delay_ms,
        demo_credentials = config.features.demo_credentials,
        dark_mode = config.features.dark_mode,
        "portal config loaded"
    );
}

/// The loaded config, or defaults when `load_config()` has not run.
pub fn portal_config() -> &'static AppConfig {
    static DEFAULT: AppConfig = AppConfig {
        login: LoginConfig {
            delay_ms: DEFAULT_LOGIN_DELAY_MS,
        },
        features: PortalFlags {
            demo_credentials: true,
            dark_mode: true,
        },
    };
    CONFIG.get().unwrap_or(&DEFAULT)
}
