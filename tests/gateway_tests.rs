use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use scan_console::adapters::http_scan_api::HttpScanApi;
use scan_console::enums::scan_status::ScanStatus;
use scan_console::enums::scan_type::ScanType;
use scan_console::errors::ApiErrorKind;
use scan_console::structs::entity_id::{ProjectId, ScanId};
use scan_console::structs::new_project::NewProject;
use scan_console::structs::scan_request::ScanRequest;
use scan_console::structs::scan_upload::ScanUpload;
use scan_console::traits::scan_api::ScanApi;

fn api(server: &MockServer) -> HttpScanApi {
    HttpScanApi::with_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn lists_projects_from_a_bare_array_with_numeric_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "projectId": 1, "name": "Web App", "description": "", "createdAt": "2024-05-01T10:00:00Z" },
            { "id": "two", "name": "Mobile" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = api(&server).list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, ProjectId::from("1"));
    assert!(projects[0].created_at.is_some());
    assert_eq!(projects[1].id.as_str(), "two");
    assert_eq!(projects[1].description_or_default(), "No description");
}

#[tokio::test]
async fn lists_scans_from_a_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scans"))
        .and(query_param("projectId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "scanId": 3, "projectId": 7, "status": "running", "scanType": "quick" }],
            "message": "ok"
        })))
        .mount(&server)
        .await;

    let scans = api(&server).list_scans(Some(ProjectId::from("7"))).await.unwrap();

    assert_eq!(scans.len(), 1);
    assert_eq!(scans[0].status, ScanStatus::Running);
    assert_eq!(scans[0].scan_type, ScanType::Quick);
}

#[tokio::test]
async fn scans_by_project_use_the_project_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scans/project/p%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let scans = api(&server).get_scans_by_project(&ProjectId::from("p 1")).await.unwrap();
    assert!(scans.is_empty());
}

#[tokio::test]
async fn created_project_falls_back_to_request_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects/create"))
        .and(body_json(json!({ "name": "Web App", "description": "" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "projectId": 11 })))
        .expect(1)
        .mount(&server)
        .await;

    let project = api(&server).create_project(&NewProject::new("Web App", "")).await.unwrap();

    assert_eq!(project.id.as_str(), "11");
    assert_eq!(project.name, "Web App");
}

#[tokio::test]
async fn created_scan_omits_missing_rules_dir() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scans"))
        .and(body_json(json!({ "projectId": "4", "sourceDir": "/src", "scanType": "full" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "scanId": 20, "status": "pending" })))
        .mount(&server)
        .await;

    let request = ScanRequest::new(ProjectId::from("4"), "/src", None, ScanType::Full);
    let scan = api(&server).create_scan(&request).await.unwrap();

    assert_eq!(scan.id, ScanId::from("20"));
    assert_eq!(scan.project_id.as_str(), "4");
    assert_eq!(scan.source_dir.as_deref(), Some("/src"));
}

#[tokio::test]
async fn backend_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/9"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "message": "project has running scans" })))
        .mount(&server)
        .await;

    let error = api(&server).delete_project(&ProjectId::from("9")).await.unwrap_err();

    assert_eq!(error.kind, ApiErrorKind::Backend);
    assert_eq!(error.status, Some(409));
    assert_eq!(error.message, "project has running scans");
    assert_eq!(error.operation, "delete project");
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = api(&server).get_project(&ProjectId::from("1")).await.unwrap_err();
    assert_eq!(error.kind, ApiErrorKind::Decode);
    assert_eq!(error.status, None);
}

#[tokio::test]
async fn list_body_without_data_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "projects": [{ "projectId": 1, "name": "Web App" }] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/scans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = api(&server);
    let projects = api.list_projects().await.unwrap_err();
    let scans = api.list_scans(None).await.unwrap_err();

    assert_eq!(projects.kind, ApiErrorKind::Decode);
    assert_eq!(projects.operation, "list projects");
    assert_eq!(scans.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn empty_data_envelope_is_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [], "message": "no projects yet" })))
        .mount(&server)
        .await;

    assert!(api(&server).list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let error = HttpScanApi::with_base_url(&uri).unwrap().list_projects().await.unwrap_err();
    assert_eq!(error.kind, ApiErrorKind::Network);
}

#[tokio::test]
async fn upload_posts_multipart_and_accepts_plain_text_ack() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scan/start"))
        .and(body_string_contains("name=\"projectId\""))
        .and(body_string_contains("filename=\"app.zip\""))
        .respond_with(ResponseTemplate::new(200).set_body_string("Scan started"))
        .expect(1)
        .mount(&server)
        .await;

    let upload = ScanUpload::new("app.zip", b"PK\x03\x04".to_vec()).with_mime_type("application/zip");
    let ack = api(&server).upload_scan_file(&ProjectId::from("5"), &upload).await.unwrap();

    assert_eq!(ack.scan_id, None);
    assert_eq!(ack.message.as_deref(), Some("Scan started"));
}

#[tokio::test]
async fn reports_come_from_the_scan_list_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "scanId": 1, "projectId": 2, "status": "completed", "issuesCount": 3, "severity": "high" }
        ])))
        .mount(&server)
        .await;

    let records = api(&server).list_reports().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].issues_found, Some(3));
    assert_eq!(records[0].scan_id, Some(ScanId::from("1")));
}
