use std::sync::Arc;
use crate::adapters::http_scan_api::HttpScanApi;
use crate::config::constants::UNKNOWN_PROJECT_NAME;
use crate::enums::fetch_outcome::FetchOutcome;
use crate::enums::sort_order::SortOrder;
use crate::enums::store_status::StoreStatus;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::services::entity_store::EntityStore;
use crate::services::in_flight::{self, InFlightRegistry};
use crate::services::report_normalizer::normalize_reports;
use crate::services::stores::Stores;
use crate::services::view_filter::compute_view;
use crate::structs::activity_entry::ActivityEntry;
use crate::structs::config::console_config::ConsoleConfig;
use crate::structs::dashboard_stats::DashboardStats;
use crate::structs::entity_id::{ProjectId, ScanId};
use crate::structs::new_project::NewProject;
use crate::structs::project::Project;
use crate::structs::report::Report;
use crate::structs::report_stats::ReportStats;
use crate::structs::scan::Scan;
use crate::structs::scan_request::ScanRequest;
use crate::structs::scan_start_ack::ScanStartAck;
use crate::structs::scan_upload::ScanUpload;
use crate::structs::view_criteria::ViewCriteria;
use crate::structs::view_snapshot::ViewSnapshot;
use crate::traits::entity::Entity;
use crate::traits::filterable::Filterable;
use crate::traits::scan_api::ScanApi;

/// Coordinates every mutation and refresh against the backend and keeps
/// the entity stores converging to what the backend reports.
///
/// Mutations validate locally, claim an in-flight key, call the backend,
/// apply the confirmed change to the stores and then refetch the affected
/// collections. A failed call leaves the stores untouched.
pub struct ScanConsole {
    api: Arc<dyn ScanApi>,
    stores: Arc<Stores>,
    in_flight: InFlightRegistry,
    recent_activity_limit: usize,
}

impl ScanConsole {

    pub fn new(api: Arc<dyn ScanApi>) -> Self {
        Self {
            api,
            stores: Arc::new(Stores::new()),
            in_flight: InFlightRegistry::new(),
            recent_activity_limit: ConsoleConfig::default().ui.recent_activity_limit,
        }
    }

    /// Builds a console talking HTTP to the configured backend.
    pub fn from_config(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let api = HttpScanApi::new(&config.api)?;
        log::info!("Scan console connected to {}", api.base_url());
        Ok(Self {
            recent_activity_limit: config.ui.recent_activity_limit,
            ..Self::new(Arc::new(api))
        })
    }

    pub fn stores(&self) -> &Arc<Stores> {
        &self.stores
    }

    pub fn in_flight(&self) -> &InFlightRegistry {
        &self.in_flight
    }

    // ---- refreshes -------------------------------------------------------

    pub async fn refresh_projects(&self) -> FetchOutcome {
        let ticket = self.stores.projects.begin_fetch();
        let result = self.api.list_projects().await;
        self.stores.projects.apply_fetch(ticket, result)
    }

    pub async fn refresh_scans(&self) -> FetchOutcome {
        let ticket = self.stores.scans.begin_fetch();
        let result = self.api.list_scans(None).await;
        self.stores.scans.apply_fetch(ticket, result)
    }

    /// Refreshes only the scans of one project; other projects' scans stay cached.
    pub async fn refresh_project_scans(&self, project_id: &ProjectId) -> FetchOutcome {
        let ticket = self.stores.scans.begin_fetch();
        let result = self.api.get_scans_by_project(project_id).await;
        self.stores.scans.apply_scoped_fetch(ticket, |scan| &scan.project_id == project_id, result)
    }

    pub async fn refresh_reports(&self) -> FetchOutcome {
        let ticket = self.stores.reports.begin_fetch();
        let result = self.api
            .list_reports()
            .await
            .map(|records| normalize_reports(records, &self.stores));
        self.stores.reports.apply_fetch(ticket, result)
    }

    /// Refreshes projects and scans together, then reports so that report
    /// rows can borrow project names and scan details.
    pub async fn refresh_all(&self) -> [FetchOutcome; 3] {
        let (projects, scans) = futures::join!(self.refresh_projects(), self.refresh_scans());
        let reports = self.refresh_reports().await;
        [projects, scans, reports]
    }

    /// Fetches one project and caches it.
    pub async fn load_project(&self, project_id: &ProjectId) -> ConsoleResult<Project> {
        Self::require_id("projectId", project_id.as_str())?;
        let project = self.api.get_project(project_id).await?;
        self.stores.projects.upsert(project.clone());
        Ok(project)
    }

    // ---- mutations -------------------------------------------------------

    pub async fn create_project(&self, request: &NewProject) -> ConsoleResult<Project> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ConsoleError::validation_error("name", &request.name, "Project name is required"));
        }
        let _guard = self.in_flight.claim(in_flight::create_project_key(name))?;

        let payload = NewProject::new(name, request.description.trim());
        log::info!("Creating project '{}'", payload.name);
        let project = self.api.create_project(&payload).await?;

        self.stores.projects.upsert(project.clone());
        self.after_mutation("create project", &[Refresh::Projects]).await;
        Ok(project)
    }

    pub async fn delete_project(&self, project_id: &ProjectId) -> ConsoleResult<()> {
        Self::require_id("projectId", project_id.as_str())?;
        let _guard = self.in_flight.claim(in_flight::delete_project_key(project_id.as_str()))?;

        log::info!("Deleting project {}", project_id);
        self.api.delete_project(project_id).await?;

        self.stores.evict_project(project_id);
        self.after_mutation("delete project", &[Refresh::Projects, Refresh::Scans, Refresh::Reports]).await;
        Ok(())
    }

    pub async fn trigger_scan(&self, request: &ScanRequest) -> ConsoleResult<Scan> {
        let request = self.validate_scan_request(request)?;
        let _guard = self.in_flight.claim(in_flight::trigger_scan_key(request.project_id.as_str()))?;

        log::info!("Triggering {} scan for project {}", request.scan_type, request.project_id);
        let scan = self.api.create_scan(&request).await?;

        self.stores.scans.upsert(scan.clone());
        self.after_mutation("trigger scan", &[Refresh::Scans, Refresh::Reports]).await;
        Ok(scan)
    }

    pub async fn delete_scan(&self, scan_id: &ScanId) -> ConsoleResult<()> {
        Self::require_id("scanId", scan_id.as_str())?;
        let _guard = self.in_flight.claim(in_flight::delete_scan_key(scan_id.as_str()))?;

        log::info!("Deleting scan {}", scan_id);
        self.api.delete_scan(scan_id).await?;

        self.stores.evict_scan(scan_id);
        self.after_mutation("delete scan", &[Refresh::Scans, Refresh::Reports]).await;
        Ok(())
    }

    pub async fn upload_scan_and_start(&self, project_id: &ProjectId, upload: &ScanUpload) -> ConsoleResult<ScanStartAck> {
        Self::require_id("projectId", project_id.as_str())?;
        if upload.file_name.trim().is_empty() || upload.is_empty() {
            return Err(ConsoleError::validation_error(
                "file",
                &upload.file_name,
                "Select a non-empty file to upload",
            ));
        }
        let _guard = self.in_flight.claim(in_flight::upload_scan_key(project_id.as_str()))?;

        let ack = self.api.upload_scan_file(project_id, upload).await?;
        log::info!(
            "Scan started from upload '{}'{}",
            upload.file_name,
            ack.scan_id.as_ref().map(|id| format!(" as scan {}", id)).unwrap_or_default()
        );

        self.after_mutation("upload scan", &[Refresh::Scans, Refresh::Reports]).await;
        Ok(ack)
    }

    // ---- derived views ---------------------------------------------------

    pub fn project_view(&self, criteria: &ViewCriteria) -> ViewSnapshot<Project> {
        Self::view_of(&self.stores.projects, criteria)
    }

    pub fn scan_view(&self, criteria: &ViewCriteria) -> ViewSnapshot<Scan> {
        Self::view_of(&self.stores.scans, criteria)
    }

    pub fn report_view(&self, criteria: &ViewCriteria) -> ViewSnapshot<Report> {
        Self::view_of(&self.stores.reports, criteria)
    }

    pub fn report_stats(&self) -> ReportStats {
        ReportStats::from_reports(&self.stores.reports.get_all())
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats::compute(
            &self.stores.projects.get_all(),
            &self.stores.scans.get_all(),
            &self.stores.reports.get_all(),
        )
    }

    /// Newest scans first; undated scans come last in cache order.
    pub fn recent_activity(&self, limit: Option<usize>) -> Vec<ActivityEntry> {
        let criteria = ViewCriteria::new().with_sort(SortOrder::NewestFirst);
        compute_view(self.stores.scans.get_all().as_slice(), &criteria)
            .into_iter()
            .take(limit.unwrap_or(self.recent_activity_limit))
            .map(|scan| ActivityEntry {
                action: ActivityEntry::action_for(scan.status).to_string(),
                project_name: self
                    .stores
                    .project_name(&scan.project_id)
                    .unwrap_or_else(|| UNKNOWN_PROJECT_NAME.to_string()),
                at: scan.created_at,
                scan_id: scan.id,
            })
            .collect()
    }

    // ---- helpers ---------------------------------------------------------

    fn view_of<T>(store: &EntityStore<T>, criteria: &ViewCriteria) -> ViewSnapshot<T>
    where
        T: Entity + Filterable,
    {
        let snapshot = store.snapshot();
        ViewSnapshot {
            items: compute_view(snapshot.records.as_slice(), criteria),
            status: snapshot.status,
            version: snapshot.version,
            stale: snapshot.status == StoreStatus::Error,
        }
    }

    fn require_id(field: &str, value: &str) -> ConsoleResult<()> {
        if value.trim().is_empty() {
            return Err(ConsoleError::validation_error(field, value, "An identifier is required"));
        }
        Ok(())
    }

    fn validate_scan_request(&self, request: &ScanRequest) -> ConsoleResult<ScanRequest> {
        Self::require_id("projectId", request.project_id.as_str())?;

        let source_dir = request.source_dir.trim();
        if source_dir.is_empty() {
            return Err(ConsoleError::validation_error("sourceDir", &request.source_dir, "Source directory is required"));
        }

        // Only checked once the project list has been loaded.
        let projects = &self.stores.projects;
        if projects.status().is_loaded() && !projects.contains(&request.project_id) {
            return Err(ConsoleError::validation_error(
                "projectId",
                request.project_id.as_str(),
                "Project does not exist",
            ));
        }

        let rules_dir = request
            .rules_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty());

        Ok(ScanRequest::new(request.project_id.clone(), source_dir, rules_dir, request.scan_type))
    }

    /// Refetches after a confirmed mutation. A failed refetch only marks the
    /// store; the mutation itself already succeeded.
    async fn after_mutation(&self, operation: &str, refreshes: &[Refresh]) {
        for refresh in refreshes {
            let outcome = match refresh {
                Refresh::Projects => self.refresh_projects().await,
                Refresh::Scans => self.refresh_scans().await,
                Refresh::Reports => self.refresh_reports().await,
            };
            if outcome == FetchOutcome::Failed {
                log::warn!("{} succeeded but refreshing {:?} failed", operation, refresh);
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Refresh {
    Projects,
    Scans,
    Reports,
}
