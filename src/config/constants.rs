use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REPORTS_PATH: &str = "/api/scans";
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const CONFIG_DIR_NAME: &str = ".scan-console";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const BASE_URL_ENV: &str = "SCAN_CONSOLE_BASE_URL";

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Capacity of each store's change channel. Slow subscribers skip ahead.
pub const STORE_EVENT_CAPACITY: usize = 64;

pub const PROJECTS_PATH: &str = "/api/projects";
pub const CREATE_PROJECT_PATH: &str = "/api/projects/create";
pub const SCANS_PATH: &str = "/api/scans";
pub const SCAN_START_PATH: &str = "/api/scan/start";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const UNKNOWN_PROJECT_NAME: &str = "Unknown project";
