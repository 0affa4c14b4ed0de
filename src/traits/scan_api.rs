use async_trait::async_trait;
use crate::errors::ApiResult;
use crate::structs::entity_id::{ProjectId, ScanId};
use crate::structs::new_project::NewProject;
use crate::structs::project::Project;
use crate::structs::report_record::ReportRecord;
use crate::structs::scan::Scan;
use crate::structs::scan_request::ScanRequest;
use crate::structs::scan_start_ack::ScanStartAck;
use crate::structs::scan_upload::ScanUpload;

/// One call per backend verb. Implementations do no caching and report
/// every failure as an [`ApiError`](crate::errors::ApiError).
#[async_trait]
pub trait ScanApi: Send + Sync {

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
