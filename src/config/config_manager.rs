use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::config::console_config::ConsoleConfig;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `~/.scan-console/config.toml`, falling back to defaults when the
    /// file does not exist. `SCAN_CONSOLE_BASE_URL` overrides the base URL.
    pub fn load() -> ConsoleResult<ConsoleConfig> {
        let config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => {
                log::debug!("No config file found, using defaults");
                ConsoleConfig::default()
            }
        };
        Ok(Self::apply_env_overrides(config))
    }

    pub fn load_from(path: &Path) -> ConsoleResult<ConsoleConfig> {
        log::info!("Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ConsoleError::config_error(&path.display().to_string(), &e.to_string()))?;
        Self::parse(&content)
            .map_err(|e| match e {
                ConsoleError::Configuration { reason, .. } => {
                    ConsoleError::config_error(&path.display().to_string(), &reason)
                }
                other => other,
            })
    }

    pub fn parse(content: &str) -> ConsoleResult<ConsoleConfig> {
        let config: ConsoleConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn apply_env_overrides(mut config: ConsoleConfig) -> ConsoleConfig {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                log::debug!("Base URL overridden by {}", BASE_URL_ENV);
                config.api.base_url = base_url.trim().to_string();
            }
        }
        config
    }

    pub fn write_sample(path: &Path) -> ConsoleResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, Self::sample_config())?;
        log::info!("Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn sample_config() -> &'static str {
        r#"# Scan Console configuration

[api]
# Root of the scanning backend
base_url = "http://localhost:8080"

# Per-request timeout
timeout_secs = 30

# Where the report list is read from. The backend serves report rows
# from the scan list; point this at "/api/reports" if it has a dedicated one.
reports_path = "/api/scans"

[ui]
# Entries shown in the dashboard activity feed
recent_activity_limit = 5

[logging]
# Used when RUST_LOG is not set
level = "info"
"#
    }

    pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&config.api.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("Unsupported base_url scheme: {}", url.scheme())),
            Err(e) => errors.push(format!("Invalid base_url '{}': {}", config.api.base_url, e)),
        }

        if config.api.timeout_secs == 0 {
            errors.push("timeout_secs must be greater than zero".to_string());
        }

        if !config.api.reports_path.starts_with('/') {
            errors.push(format!("reports_path must start with '/': {}", config.api.reports_path));
        }

        if config.ui.recent_activity_limit == 0 {
            errors.push("recent_activity_limit must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
