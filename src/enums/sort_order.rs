use serde::{Deserialize, Serialize};

/// Ordering applied after filtering. Every order is stable.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Original,
    NewestFirst,
    SeverityDesc,
}
