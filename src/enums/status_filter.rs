use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::enums::scan_status::ScanStatus;
use crate::errors::ConsoleError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ScanStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: Option<ScanStatus>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == Some(*wanted),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}
