use std::cmp::Reverse;
use crate::enums::sort_order::SortOrder;
use crate::structs::view_criteria::ViewCriteria;
use crate::traits::filterable::Filterable;

/// Filters and orders `collection` by `criteria`.
///
/// All criteria AND-compose. The search text matches, case-insensitively,
/// either the display name or the id. Sorting is stable, so ties keep the
/// collection order and equal inputs always give equal outputs.
pub fn compute_view<T>(collection: &[T], criteria: &ViewCriteria) -> Vec<T>
where
    T: Filterable + Clone,
{
    let search = criteria.normalized_search();
    let mut view: Vec<T> = collection
        .iter()
        .filter(|record| matches(*record, criteria, search.as_deref()))
        .cloned()
        .collect();

    match criteria.sort {
        SortOrder::Original => {}
        SortOrder::NewestFirst => {
            // Records without a timestamp go last.
            view.sort_by_key(|record| Reverse(record.created_at().map(|at| at.timestamp_millis())));
        }
        SortOrder::SeverityDesc => {
            view.sort_by_key(|record| Reverse(record.severity().map(|severity| severity.rank())));
        }
    }
    view
}

/// Whether a single record passes `criteria`. `search` must already be
/// normalized (see [`ViewCriteria::normalized_search`]).
pub fn matches<T: Filterable>(record: &T, criteria: &ViewCriteria, search: Option<&str>) -> bool {
    if let Some(needle) = search {
        let name_hit = record.display_name().to_lowercase().contains(needle);
        let id_hit = record.id_text().to_lowercase().contains(needle);
        if !name_hit && !id_hit {
            return false;
        }
    }

    if !criteria.status.accepts(record.status()) {
        return false;
    }

    if !criteria.severity.accepts(record.severity()) {
        return false;
    }

    if let Some(scan_id) = &criteria.scan_id {
        if record.scan_id() != Some(scan_id) {
            return false;
        }
    }

    if let Some(project_id) = &criteria.project_id {
        if record.project_id() != Some(project_id) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::scan_status::ScanStatus;
    use crate::enums::scan_type::ScanType;
    use crate::enums::status_filter::StatusFilter;
    use crate::structs::entity_id::{ProjectId, ScanId};
    use crate::structs::scan::Scan;
    use chrono::{TimeZone, Utc};

    fn scan(id: &str, source: &str, status: ScanStatus, day: Option<u32>) -> Scan {
        Scan {
            id: ScanId::from(id),
            project_id: ProjectId::from("p1"),
            source_dir: Some(source.to_string()),
            rules_dir: None,
            scan_type: ScanType::Full,
            status,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()),
            issues_count: None,
        }
    }

    #[test]
    fn newest_first_keeps_undated_records_last_in_original_order() {
        let scans = vec![
            scan("a", "/a", ScanStatus::Completed, None),
            scan("b", "/b", ScanStatus::Completed, Some(2)),
            scan("c", "/c", ScanStatus::Completed, None),
            scan("d", "/d", ScanStatus::Completed, Some(9)),
        ];
        let criteria = ViewCriteria::new().with_sort(SortOrder::NewestFirst);
        let ids: Vec<String> = compute_view(&scans, &criteria).iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn blank_search_text_constrains_nothing() {
        let scans = vec![scan("a", "/a", ScanStatus::Running, None)];
        let criteria = ViewCriteria::new().with_search("   ");
        assert_eq!(compute_view(&scans, &criteria).len(), 1);
    }

    #[test]
    fn status_filter_excludes_other_statuses() {
        let scans = vec![
            scan("a", "/a", ScanStatus::Running, None),
            scan("b", "/b", ScanStatus::Failed, None),
        ];
        let criteria = ViewCriteria::new().with_status(StatusFilter::Only(ScanStatus::Failed));
        let view = compute_view(&scans, &criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id.as_str(), "b");
    }
}
