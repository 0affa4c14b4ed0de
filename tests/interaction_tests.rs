use scan_console::enums::confirmation_state::ConfirmationState;
use scan_console::enums::dialog_state::DialogState;
use scan_console::enums::scan_type::ScanType;
use scan_console::enums::upload_state::UploadState;
use scan_console::errors::ConsoleError;
use scan_console::structs::entity_id::{ProjectId, ScanId};
use scan_console::structs::scan_start_ack::ScanStartAck;
use scan_console::structs::scan_upload::ScanUpload;
use scan_console::ui::confirmation::{DeleteProjectConfirmation, DeleteScanConfirmation};
use scan_console::ui::forms::{CreateProjectDialog, ScanForm, TriggerScanDialog};
use scan_console::ui::upload_flow::UploadFlow;
use crate::common::{backend_error, console_with, project, scan, MockBackend};
use scan_console::enums::scan_status::ScanStatus;

#[test]
fn opening_resets_fields() {
    let mut dialog = CreateProjectDialog::new();
    dialog.open();
    dialog.form_mut().unwrap().name = "Draft".to_string();
    assert!(dialog.close());

    dialog.open();
    assert_eq!(dialog.form().name, "");
    assert_eq!(dialog.state(), &DialogState::Open);
}

#[test]
fn closed_dialog_cannot_be_edited_or_submitted() {
    let mut dialog = CreateProjectDialog::new();
    assert!(dialog.form_mut().is_none());
    assert!(!dialog.can_submit());
    assert!(dialog.begin_submit().is_err());
}

#[test]
fn invalid_fields_open_with_error_and_block_submission() {
    let mut dialog = TriggerScanDialog::new();
    dialog.open_for_project(&ProjectId::from("3"));
    assert!(!dialog.can_submit());

    let error = dialog.begin_submit().unwrap_err();

    assert!(error.is_validation());
    assert!(dialog.state().error_message().is_some());
    assert_eq!(dialog.form().project_id, "3");
}

#[test]
fn submitting_disables_resubmission_and_closing() {
    let mut dialog = CreateProjectDialog::new();
    dialog.open();
    dialog.form_mut().unwrap().name = "Web App".to_string();

    let request = dialog.begin_submit().unwrap();
    assert_eq!(request.name, "Web App");
    assert!(dialog.state().is_submitting());
    assert!(!dialog.can_submit());
    assert!(!dialog.close());
    assert!(matches!(dialog.begin_submit(), Err(ConsoleError::InFlight { .. })));
}

#[test]
fn scan_form_estimates_duration_by_type() {
    let mut form = ScanForm::default();
    assert_eq!(form.estimated_duration(), "15-30 min");
    form.scan_type = ScanType::Quick;
    assert_eq!(form.estimated_duration(), "5-10 min");
}

#[tokio::test]
async fn successful_submit_closes_and_resets() {
    let mut backend = MockBackend::new();
    backend.expect_create_project().times(1).returning(|request| Ok(project("1", &request.name)));
    backend.expect_list_projects().returning(|| Ok(vec![project("1", "Web App")]));
    let console = console_with(backend);

    let mut dialog = CreateProjectDialog::new();
    dialog.open();
    dialog.form_mut().unwrap().name = "  Web App ".to_string();
    let created = dialog.submit(&console).await.unwrap();

    assert_eq!(created.name, "Web App");
    assert_eq!(dialog.state(), &DialogState::Closed);
    assert_eq!(dialog.form().name, "");
}

#[tokio::test]
async fn failed_submit_keeps_fields_and_shows_error() {
    let mut backend = MockBackend::new();
    backend
        .expect_create_scan()
        .times(1)
        .returning(|_| Err(backend_error("trigger scan", 500)));
    let console = console_with(backend);

    let mut dialog = TriggerScanDialog::new();
    dialog.open_for_project(&ProjectId::from("2"));
    if let Some(form) = dialog.form_mut() {
        form.source_dir = "/src".to_string();
        form.scan_type = ScanType::Compliance;
    }
    assert!(dialog.can_submit());

    assert!(dialog.submit(&console).await.is_err());

    let message = dialog.state().error_message().unwrap_or_default();
    assert!(message.contains("500"));
    assert_eq!(dialog.form().source_dir, "/src");
    assert!(dialog.can_submit());
}

#[tokio::test]
async fn declining_a_deletion_has_no_side_effect() {
    let mut backend = MockBackend::new();
    backend.expect_delete_project().times(0);
    let console = console_with(backend);

    let mut confirmation = DeleteProjectConfirmation::new();
    assert!(confirmation.request(ProjectId::from("1")));
    confirmation.decline();

    assert_eq!(confirmation.state(), &ConfirmationState::Closed);
    assert!(confirmation.submit(&console).await.unwrap_err().is_validation());
}

#[tokio::test]
async fn confirmed_deletion_runs_once_and_closes() {
    let mut backend = MockBackend::new();
    backend.expect_list_scans().returning(|_| Ok(vec![scan("9", "1", ScanStatus::Completed)]));
    backend.expect_delete_scan().times(1).returning(|_| Ok(()));
    backend.expect_list_reports().returning(|| Ok(Vec::new()));
    let console = console_with(backend);
    console.refresh_scans().await;

    let mut confirmation = DeleteScanConfirmation::new();
    confirmation.request(ScanId::from("9"));
    confirmation.submit(&console).await.unwrap();

    assert_eq!(confirmation.state(), &ConfirmationState::Closed);
    assert!(confirmation.confirm().is_none());
}

#[tokio::test]
async fn failed_deletion_can_be_retried() {
    let mut backend = MockBackend::new();
    backend
        .expect_delete_scan()
        .times(1)
        .returning(|_| Err(backend_error("delete scan", 503)));
    let console = console_with(backend);

    let mut confirmation = DeleteScanConfirmation::new();
    confirmation.request(ScanId::from("4"));
    assert!(confirmation.submit(&console).await.is_err());

    assert!(confirmation.state().error_message().is_some());
    assert_eq!(confirmation.state().target(), Some(&ScanId::from("4")));
    assert_eq!(confirmation.confirm(), Some(ScanId::from("4")));
}

#[tokio::test]
async fn upload_flow_walks_from_selection_to_started() {
    let mut backend = MockBackend::new();
    backend.expect_upload_scan_file().times(1).returning(|_, _| {
        Ok(ScanStartAck {
            scan_id: Some(ScanId::from("77")),
            message: None,
        })
    });
    backend.expect_list_scans().returning(|_| Ok(Vec::new()));
    backend.expect_list_reports().returning(|| Ok(Vec::new()));
    let console = console_with(backend);

    let mut flow = UploadFlow::new(ProjectId::from("5"));
    assert!(flow.start(&console).await.unwrap_err().is_validation());
    assert_eq!(flow.state(), &UploadState::Idle);

    assert!(flow.select_file(ScanUpload::new("src.zip", vec![1, 2, 3])));
    let ack = flow.start(&console).await.unwrap();

    assert_eq!(ack.scan_id, Some(ScanId::from("77")));
    assert!(matches!(flow.state(), UploadState::Started(_)));

    flow.reset();
    assert_eq!(flow.state(), &UploadState::Idle);
}

#[tokio::test]
async fn failed_upload_keeps_the_file_for_a_retry() {
    let mut backend = MockBackend::new();
    let mut attempts = 0;
    backend.expect_upload_scan_file().times(2).returning(move |_, upload| {
        attempts += 1;
        assert_eq!(upload.file_name, "huge.zip");
        if attempts == 1 {
            Err(backend_error("upload scan file", 413))
        } else {
            Ok(ScanStartAck::default())
        }
    });
    backend.expect_list_scans().returning(|_| Ok(Vec::new()));
    backend.expect_list_reports().returning(|| Ok(Vec::new()));
    let console = console_with(backend);

    let mut flow = UploadFlow::new(ProjectId::from("5"));
    flow.select_file(ScanUpload::new("huge.zip", vec![0; 16]));

    assert!(flow.start(&console).await.is_err());
    assert!(flow.state().error_message().is_some_and(|message| message.contains("413")));
    assert!(matches!(flow.state(), UploadState::Failed { upload, .. } if upload.file_name == "huge.zip"));

    flow.start(&console).await.unwrap();
    assert!(matches!(flow.state(), UploadState::Started(_)));
}
