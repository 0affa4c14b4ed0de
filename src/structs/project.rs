use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::entity_id::ProjectId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "projectId", alias = "id")]
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::helpers::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => "No description",
        }
    }
}
