use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::ConsoleError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    #[default]
    Full,
    Quick,
    Vulnerability,
    Compliance,
}

impl ScanType {
    pub const ALL: [ScanType; 4] = [Self::Full, Self::Quick, Self::Vulnerability, Self::Compliance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quick => "quick",
            Self::Vulnerability => "vulnerability",
            Self::Compliance => "compliance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Full Security Scan",
            Self::Quick => "Quick Scan",
            Self::Vulnerability => "Vulnerability Assessment",
            Self::Compliance => "Compliance Check",
        }
    }

    /// Rough duration shown next to the trigger form.
    pub fn estimated_duration(&self) -> &'static str {
        match self {
            Self::Quick => "5-10 min",
            _ => "15-30 min",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanType {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scan_type| scan_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConsoleError::validation_error(
                "scanType",
                s,
                "must be one of full, quick, vulnerability, compliance",
            ))
    }
}
