use crate::enums::upload_state::UploadState;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::services::scan_console::ScanConsole;
use crate::structs::entity_id::ProjectId;
use crate::structs::scan_start_ack::ScanStartAck;
use crate::structs::scan_upload::ScanUpload;

/// Upload-and-start progress for one project:
/// `Idle → FileSelected → Uploading → Started | Failed`. A failed upload
/// keeps its file and can be started again.
#[derive(Debug)]
pub struct UploadFlow {
    project_id: ProjectId,
    state: UploadState,
}

impl UploadFlow {
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            state: UploadState::Idle,
        }
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading)
    }

    /// Picks (or re-picks) the file. Returns false during an upload.
    pub fn select_file(&mut self, upload: ScanUpload) -> bool {
        if self.is_uploading() {
            return false;
        }
        log::debug!("Selected '{}' for project {}", upload.file_name, self.project_id);
        self.state = UploadState::FileSelected(upload);
        true
    }

    pub async fn start(&mut self, console: &ScanConsole) -> ConsoleResult<ScanStartAck> {
        let upload = match std::mem::take(&mut self.state) {
            UploadState::FileSelected(upload) | UploadState::Failed { upload, .. } => upload,
            UploadState::Uploading => {
                self.state = UploadState::Uploading;
                return Err(ConsoleError::in_flight(&format!("upload for project {}", self.project_id)));
            }
            other => {
                self.state = other;
                return Err(ConsoleError::validation_error("file", "", "Select a file to upload"));
            }
        };

        self.state = UploadState::Uploading;
        let result = console.upload_scan_and_start(&self.project_id, &upload).await;
        self.state = match &result {
            Ok(ack) => UploadState::Started(ack.clone()),
            Err(error) => UploadState::Failed {
                upload,
                message: error.user_message(),
            },
        };
        result
    }

    /// Back to `Idle`, except while an upload is running.
    pub fn reset(&mut self) {
        if !self.is_uploading() {
            self.state = UploadState::Idle;
        }
    }
}
