use std::fmt::Display;
use std::hash::Hash;
use crate::enums::entity_kind::EntityKind;
use crate::structs::entity_id::{ProjectId, ScanId};
use crate::structs::project::Project;
use crate::structs::report::Report;
use crate::structs::report_key::ReportKey;
use crate::structs::scan::Scan;

/// A record cached by an entity store, identified by `key()`.
pub trait Entity: Clone + Send + Sync + 'static {
    type Key: Clone + Eq + Hash + Display + Send + Sync + 'static;

    const KIND: EntityKind;

    fn key(&self) -> Self::Key;
}

impl Entity for Project {
    type Key = ProjectId;

    const KIND: EntityKind = EntityKind::Project;

    fn key(&self) -> ProjectId {
        self.id.clone()
    }
}

impl Entity for Scan {
    type Key = ScanId;

    const KIND: EntityKind = EntityKind::Scan;

    fn key(&self) -> ScanId {
        self.id.clone()
    }
}

impl Entity for Report {
    type Key = ReportKey;

    const KIND: EntityKind = EntityKind::Report;

    fn key(&self) -> ReportKey {
        self.key.clone()
    }
}
