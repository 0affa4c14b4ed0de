use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_RECENT_ACTIVITY_LIMIT, DEFAULT_REPORTS_PATH,
    DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_reports_path() -> String {
        DEFAULT_REPORTS_PATH.to_string()
    }

    pub fn default_recent_activity_limit() -> usize {
        DEFAULT_RECENT_ACTIVITY_LIMIT
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
