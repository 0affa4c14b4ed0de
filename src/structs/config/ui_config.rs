use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default = "ConfigHelper::default_recent_activity_limit")]
    pub recent_activity_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: ConfigHelper::default_recent_activity_limit(),
        }
    }
}
