use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::errors::ConsoleError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Records with unknown severity only pass the `All` filter.
    pub fn accepts(&self, severity: Option<Severity>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => severity == Some(*wanted),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}
