use serde::{Deserialize, Serialize};

/// Where a displayed field value came from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Sent by the backend.
    Reported,
    /// Filled in locally by the documented fallback policy.
    Derived,
}
