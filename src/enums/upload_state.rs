use crate::structs::scan_start_ack::ScanStartAck;
use crate::structs::scan_upload::ScanUpload;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    FileSelected(ScanUpload),
    Uploading,
    Started(ScanStartAck),
    /// The selected file is kept so the upload can be started again.
    Failed { upload: ScanUpload, message: String },
}

impl UploadState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
