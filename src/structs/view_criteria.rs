use reqwest::Url;
use serde::{Deserialize, Serialize};
use crate::enums::severity_filter::SeverityFilter;
use crate::enums::sort_order::SortOrder;
use crate::enums::status_filter::StatusFilter;
use crate::errors::ConsoleResult;
use crate::structs::entity_id::{ProjectId, ScanId};

/// Filter criteria for a derived view. Every field is independent and the
/// defaults constrain nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCriteria {
    pub search_text: Option<String>,
    pub status: StatusFilter,
    pub severity: SeverityFilter,
    pub scan_id: Option<ScanId>,
    pub project_id: Option<ProjectId>,
    pub sort: SortOrder,
}

impl ViewCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.search_text = Some(text.to_string());
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_severity(mut self, severity: SeverityFilter) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_scan_id(mut self, scan_id: ScanId) -> Self {
        self.scan_id = Some(scan_id);
        self
    }

    pub fn with_project_id(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Lower-cased, trimmed search text, or `None` when it constrains nothing.
    pub fn normalized_search(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }

    /// Reads criteria from a navigation URL: `scanId`, `projectId`, `q`,
    /// `status` and `severity` query parameters.
    pub fn from_navigation(url: &Url) -> ConsoleResult<Self> {
        let mut criteria = Self::default();
        for (name, value) in url.query_pairs() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match name.as_ref() {
                "scanId" => criteria.scan_id = Some(ScanId::from(value)),
                "projectId" => criteria.project_id = Some(ProjectId::from(value)),
                "q" => criteria.search_text = Some(value.to_string()),
                "status" => criteria.status = value.parse()?,
                "severity" => criteria.severity = value.parse()?,
                other => log::debug!("Ignoring navigation parameter '{}'", other),
            }
        }
        Ok(criteria)
    }
}
