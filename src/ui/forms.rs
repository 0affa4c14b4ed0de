use crate::enums::scan_type::ScanType;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::services::scan_console::ScanConsole;
use crate::structs::entity_id::ProjectId;
use crate::structs::new_project::NewProject;
use crate::structs::project::Project;
use crate::structs::scan::Scan;
use crate::structs::scan_request::ScanRequest;
use crate::traits::dialog_form::DialogForm;
use crate::ui::dialog::FormDialog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

impl DialogForm for ProjectForm {
    type Request = NewProject;

    fn validate(&self) -> ConsoleResult<NewProject> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ConsoleError::validation_error("name", &self.name, "Project name is required"));
        }
        Ok(NewProject::new(name, self.description.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanForm {
    pub project_id: String,
    pub source_dir: String,
    pub rules_dir: String,
    pub scan_type: ScanType,
}

impl ScanForm {
    pub fn estimated_duration(&self) -> &'static str {
        self.scan_type.estimated_duration()
    }
}

impl DialogForm for ScanForm {
    type Request = ScanRequest;

    fn validate(&self) -> ConsoleResult<ScanRequest> {
        let project_id = self.project_id.trim();
        if project_id.is_empty() {
            return Err(ConsoleError::validation_error("projectId", &self.project_id, "Select a project"));
        }
        let source_dir = self.source_dir.trim();
        if source_dir.is_empty() {
            return Err(ConsoleError::validation_error("sourceDir", &self.source_dir, "Source directory is required"));
        }
        let rules_dir = Some(self.rules_dir.trim()).filter(|dir| !dir.is_empty());
        Ok(ScanRequest::new(ProjectId::new(project_id), source_dir, rules_dir, self.scan_type))
    }
}

pub type CreateProjectDialog = FormDialog<ProjectForm>;
pub type TriggerScanDialog = FormDialog<ScanForm>;

impl FormDialog<ProjectForm> {
    pub async fn submit(&mut self, console: &ScanConsole) -> ConsoleResult<Project> {
        let request = self.begin_submit()?;
        let result = console.create_project(&request).await;
        self.finish(&result);
        result
    }
}

impl FormDialog<ScanForm> {
    /// Opens the dialog with the project already picked.
    pub fn open_for_project(&mut self, project_id: &ProjectId) {
        self.open();
        if let Some(form) = self.form_mut() {
            form.project_id = project_id.to_string();
        }
    }

    pub async fn submit(&mut self, console: &ScanConsole) -> ConsoleResult<Scan> {
        let request = self.begin_submit()?;
        let result = console.trigger_scan(&request).await;
        self.finish(&result);
        result
    }
}
