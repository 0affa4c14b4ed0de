use crate::config::constants::UNKNOWN_PROJECT_NAME;
use crate::enums::scan_status::ScanStatus;
use crate::services::stores::Stores;
use crate::structs::report::Report;
use crate::structs::report_key::ReportKey;
use crate::structs::report_record::ReportRecord;
use crate::structs::sourced::Sourced;

/// Turns backend report rows into `Report`s.
///
/// Missing descriptive fields are filled from the project and scan caches
/// and tagged `Derived`; when the caches know nothing either, a fixed
/// fallback is used (`"Unknown project"`, `pending`, `0`). Severity and
/// duration are never invented. Rows without a scan id or project id have
/// no identity and are dropped.
pub fn normalize_reports(records: Vec<ReportRecord>, stores: &Stores) -> Vec<Report> {
    records
        .into_iter()
        .filter_map(|record| normalize_report(record, stores))
        .collect()
}

pub fn normalize_report(record: ReportRecord, stores: &Stores) -> Option<Report> {
    let (scan_id, project_id) = match (record.scan_id, record.project_id) {
        (Some(scan_id), Some(project_id)) => (scan_id, project_id),
        (scan_id, project_id) => {
            log::warn!(
                "Dropping report row without identity (scan {:?}, project {:?})",
                scan_id.map(|id| id.to_string()),
                project_id.map(|id| id.to_string())
            );
            return None;
        }
    };

    let cached_scan = stores.scans.get_by_id(&scan_id);

    let project_name = match record.project_name {
        Some(name) if !name.trim().is_empty() => Sourced::reported(name),
        _ => Sourced::derived(
            stores
                .project_name(&project_id)
                .unwrap_or_else(|| UNKNOWN_PROJECT_NAME.to_string()),
        ),
    };

    let status = match record.status {
        Some(status) => Sourced::reported(status),
        None => Sourced::derived(cached_scan.as_ref().map_or(ScanStatus::Pending, |scan| scan.status)),
    };

    let issues_found = match record.issues_found {
        Some(count) => Sourced::reported(count),
        None => Sourced::derived(cached_scan.as_ref().and_then(|scan| scan.issues_count).unwrap_or(0)),
    };

    let created_at = record.created_at.or_else(|| cached_scan.as_ref().and_then(|scan| scan.created_at));

    Some(Report {
        key: ReportKey::new(scan_id, project_id),
        project_name,
        severity: record.severity,
        status,
        issues_found,
        duration: record.duration.filter(|duration| !duration.trim().is_empty()),
        created_at,
    })
}
