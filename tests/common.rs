use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use wiremock::MockServer;
use scan_console::adapters::http_scan_api::HttpScanApi;
use scan_console::enums::scan_status::ScanStatus;
use scan_console::enums::scan_type::ScanType;
use scan_console::enums::severity::Severity;
use scan_console::errors::{ApiError, ApiResult};
use scan_console::services::scan_console::ScanConsole;
use scan_console::structs::entity_id::{ProjectId, ScanId};
use scan_console::structs::new_project::NewProject;
use scan_console::structs::project::Project;
use scan_console::structs::report::Report;
use scan_console::structs::report_key::ReportKey;
use scan_console::structs::report_record::ReportRecord;
use scan_console::structs::scan::Scan;
use scan_console::structs::scan_request::ScanRequest;
use scan_console::structs::scan_start_ack::ScanStartAck;
use scan_console::structs::scan_upload::ScanUpload;
use scan_console::structs::sourced::Sourced;
use scan_console::traits::scan_api::ScanApi;

mock! {
    pub Backend {}

    #[async_trait]
    impl ScanApi for Backend {
        async fn list_projects(&self) -> ApiResult<Vec<Project>>;
        async fn get_project(&self, project_id: &ProjectId) -> ApiResult<Project>;
        async fn create_project(&self, project: &NewProject) -> ApiResult<Project>;
        async fn delete_project(&self, project_id: &ProjectId) -> ApiResult<()>;
        async fn list_scans(&self, project_filter: Option<ProjectId>) -> ApiResult<Vec<Scan>>;
        async fn get_scans_by_project(&self, project_id: &ProjectId) -> ApiResult<Vec<Scan>>;
        async fn create_scan(&self, request: &ScanRequest) -> ApiResult<Scan>;
        async fn delete_scan(&self, scan_id: &ScanId) -> ApiResult<()>;
        async fn upload_scan_file(&self, project_id: &ProjectId, upload: &ScanUpload) -> ApiResult<ScanStartAck>;
        async fn list_reports(&self) -> ApiResult<Vec<ReportRecord>>;
    }
}

pub fn console_with(backend: MockBackend) -> ScanConsole {
    ScanConsole::new(Arc::new(backend))
}

pub fn http_console(server: &MockServer) -> ScanConsole {
    let api = HttpScanApi::with_base_url(&server.uri()).unwrap();
    ScanConsole::new(Arc::new(api))
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: ProjectId::from(id),
        name: name.to_string(),
        description: None,
        created_at: Some(day(1)),
    }
}

pub fn scan(id: &str, project_id: &str, status: ScanStatus) -> Scan {
    Scan {
        id: ScanId::from(id),
        project_id: ProjectId::from(project_id),
        source_dir: Some(format!("/src/{}", id)),
        rules_dir: None,
        scan_type: ScanType::Full,
        status,
        created_at: None,
        issues_count: None,
    }
}

pub fn report(scan_id: &str, project_id: &str, status: ScanStatus, severity: Option<Severity>) -> Report {
    Report {
        key: ReportKey::new(ScanId::from(scan_id), ProjectId::from(project_id)),
        project_name: Sourced::reported(format!("Project {}", project_id)),
        severity,
        status: Sourced::reported(status),
        issues_found: Sourced::reported(0),
        duration: None,
        created_at: None,
    }
}

pub fn backend_error(operation: &str, status: u16) -> ApiError {
    ApiError::backend(operation, None, status, "backend exploded")
}
