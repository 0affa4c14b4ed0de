use proptest::prelude::*;
use reqwest::Url;
use scan_console::enums::scan_status::ScanStatus;
use scan_console::enums::severity::Severity;
use scan_console::enums::severity_filter::SeverityFilter;
use scan_console::enums::sort_order::SortOrder;
use scan_console::enums::status_filter::StatusFilter;
use scan_console::services::view_filter::compute_view;
use scan_console::structs::entity_id::{ProjectId, ScanId};
use scan_console::structs::report::Report;
use scan_console::structs::view_criteria::ViewCriteria;
use crate::common::{project, report};

fn keys(reports: &[Report]) -> Vec<String> {
    reports.iter().map(|r| r.key.to_string()).collect()
}

fn sample_reports() -> Vec<Report> {
    vec![
        report("1", "p1", ScanStatus::Completed, Some(Severity::Critical)),
        report("2", "p1", ScanStatus::Completed, Some(Severity::Low)),
        report("3", "p2", ScanStatus::Running, Some(Severity::Critical)),
        report("4", "p2", ScanStatus::Failed, None),
    ]
}

#[test]
fn status_and_severity_compose_as_intersection() {
    let reports = sample_reports();
    let both = ViewCriteria::new()
        .with_status(StatusFilter::Only(ScanStatus::Completed))
        .with_severity(SeverityFilter::Only(Severity::Critical));

    assert_eq!(keys(&compute_view(&reports, &both)), vec!["1-p1"]);
}

#[test]
fn unknown_severity_only_passes_the_all_filter() {
    let reports = sample_reports();
    let all = ViewCriteria::new().with_severity(SeverityFilter::All);
    let low = ViewCriteria::new().with_severity(SeverityFilter::Only(Severity::Low));

    assert_eq!(compute_view(&reports, &all).len(), 4);
    assert_eq!(keys(&compute_view(&reports, &low)), vec!["2-p1"]);
}

#[test]
fn search_matches_name_or_id_ignoring_case() {
    let projects = vec![project("alpha-7", "Web App"), project("beta", "Mobile")];

    let by_name = compute_view(&projects, &ViewCriteria::new().with_search("web"));
    let by_id = compute_view(&projects, &ViewCriteria::new().with_search("ALPHA"));
    let none = compute_view(&projects, &ViewCriteria::new().with_search("desktop"));

    assert_eq!(by_name.len(), 1);
    assert_eq!(by_id.len(), 1);
    assert!(none.is_empty());
}

#[test]
fn scan_and_project_ids_narrow_reports() {
    let reports = sample_reports();
    let by_scan = ViewCriteria::new().with_scan_id(ScanId::from("3"));
    let by_project = ViewCriteria::new().with_project_id(ProjectId::from("p1"));

    assert_eq!(keys(&compute_view(&reports, &by_scan)), vec!["3-p2"]);
    assert_eq!(keys(&compute_view(&reports, &by_project)), vec!["1-p1", "2-p1"]);
}

#[test]
fn severity_sort_is_stable_and_puts_unknown_last() {
    let reports = sample_reports();
    let criteria = ViewCriteria::new().with_sort(SortOrder::SeverityDesc);

    assert_eq!(keys(&compute_view(&reports, &criteria)), vec!["1-p1", "3-p2", "2-p1", "4-p2"]);
}

#[test]
fn navigation_parameters_become_criteria() {
    let url = Url::parse("http://console.local/reports?scanId=42&status=completed&severity=all&q=%20web%20").unwrap();
    let criteria = ViewCriteria::from_navigation(&url).unwrap();

    assert_eq!(criteria.scan_id, Some(ScanId::from("42")));
    assert_eq!(criteria.status, StatusFilter::Only(ScanStatus::Completed));
    assert_eq!(criteria.severity, SeverityFilter::All);
    assert_eq!(criteria.normalized_search().as_deref(), Some("web"));
}

#[test]
fn unknown_status_in_navigation_is_a_validation_error() {
    let url = Url::parse("http://console.local/reports?status=exploded").unwrap();
    let error = ViewCriteria::from_navigation(&url).unwrap_err();
    assert!(error.is_validation());
}

fn status_strategy() -> impl Strategy<Value = ScanStatus> {
    prop::sample::select(ScanStatus::ALL.to_vec())
}

fn severity_strategy() -> impl Strategy<Value = Option<Severity>> {
    prop::option::of(prop::sample::select(Severity::ALL.to_vec()))
}

fn reports_strategy() -> impl Strategy<Value = Vec<Report>> {
    prop::collection::vec((status_strategy(), severity_strategy()), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, severity))| report(&i.to_string(), &format!("p{}", i % 3), status, severity))
            .collect()
    })
}

proptest! {
    #[test]
    fn compute_view_is_deterministic(
        reports in reports_strategy(),
        status in status_strategy(),
        sort in prop::sample::select(vec![SortOrder::Original, SortOrder::NewestFirst, SortOrder::SeverityDesc]),
    ) {
        let criteria = ViewCriteria::new().with_status(StatusFilter::Only(status)).with_sort(sort);
        prop_assert_eq!(compute_view(&reports, &criteria), compute_view(&reports, &criteria));
    }

    #[test]
    fn combined_filter_is_intersection_of_single_filters(
        reports in reports_strategy(),
        status in status_strategy(),
        severity in prop::sample::select(Severity::ALL.to_vec()),
    ) {
        let status_only = ViewCriteria::new().with_status(StatusFilter::Only(status));
        let severity_only = ViewCriteria::new().with_severity(SeverityFilter::Only(severity));
        let combined = ViewCriteria::new()
            .with_status(StatusFilter::Only(status))
            .with_severity(SeverityFilter::Only(severity));

        let by_severity = keys(&compute_view(&reports, &severity_only));
        let expected: Vec<String> = keys(&compute_view(&reports, &status_only))
            .into_iter()
            .filter(|key| by_severity.contains(key))
            .collect();

        prop_assert_eq!(keys(&compute_view(&reports, &combined)), expected);
    }
}
