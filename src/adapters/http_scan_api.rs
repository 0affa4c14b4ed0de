use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;
use crate::config::constants::{
    timeout_duration, CREATE_PROJECT_PATH, PROJECTS_PATH, REQUEST_ID_HEADER, SCANS_PATH, SCAN_START_PATH,
};
use crate::errors::{ApiError, ApiResult};
use crate::structs::api_response::ApiResponse;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::entity_id::{ProjectId, ScanId};
use crate::structs::new_project::NewProject;
use crate::structs::project::Project;
use crate::structs::report_record::ReportRecord;
use crate::structs::scan::Scan;
use crate::structs::scan_request::ScanRequest;
use crate::structs::scan_start_ack::ScanStartAck;
use crate::structs::scan_upload::ScanUpload;
use crate::traits::scan_api::ScanApi;

/// `ScanApi` over the backend's JSON/HTTP contract.
pub struct HttpScanApi {
    client: Client,
    base_url: Url,
    reports_path: String,
}

impl HttpScanApi {

    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::network("client setup", Some(&config.base_url), &format!("invalid base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::network("client setup", Some(&config.base_url), &e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            reports_path: config.reports_path.clone(),
        })
    }

    pub fn with_base_url(base_url: &str) -> ApiResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `path` and then each id segment (percent-encoded) to the base URL.
    fn endpoint(&self, path: &str, ids: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut()
                .map_err(|_| ApiError::network("URL building", Some(self.base_url.as_str()), "base URL cannot carry a path"))?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
            segments.extend(ids);
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, operation: &str, url: &Url) -> ApiResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        log::debug!("[{}] {} -> {}", request_id, operation, url);

        let response = match request.header(REQUEST_ID_HEADER, &request_id).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("[{}] Network error during {} request: {}", request_id, operation, e);
                return Err(ApiError::network(operation, Some(url.as_str()), &e.to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            log::debug!("[{}] {} answered {}", request_id, operation, status);
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        let message = Self::extract_message(&error_text);
        log::error!("[{}] {} request failed with status {}: {}", request_id, operation, status, message);
        Err(ApiError::backend(operation, Some(url.as_str()), status.as_u16(), &message))
    }

    /// Pulls `message` or `error` out of a JSON error body, else returns the text.
    fn extract_message(body: &str) -> String {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            for field in ["message", "error", "detail"] {
                if let Some(Value::String(message)) = map.get(field) {
                    return message.clone();
                }
            }
        }
        body.trim().to_string()
    }

    async fn read_body(response: Response, operation: &str, url: &Url) -> ApiResult<Vec<u8>> {
        match response.bytes().await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(e) => {
                log::error!("Failed to read response body for {}: {}", operation, e);
                Err(ApiError::network(operation, Some(url.as_str()), &e.to_string()))
            }
        }
    }

    fn decode<R: DeserializeOwned>(body: &[u8], operation: &str, url: &Url) -> ApiResult<R> {
        serde_json::from_slice(body).map_err(|e| {
            log::error!("Failed to parse JSON response for {}: {}", operation, e);
            ApiError::decode(operation, Some(url.as_str()), &e.to_string())
        })
    }

    async fn get_list<R: DeserializeOwned>(&self, url: Url, operation: &str) -> ApiResult<Vec<R>> {
        let response = self.send(self.client.get(url.clone()), operation, &url).await?;
        let body = Self::read_body(response, operation, &url).await?;
        let records: ApiResponse<R> = Self::decode(&body, operation, &url)?;
        if let Some(message) = records.message() {
            log::debug!("{} answered: {}", operation, message);
        }
        Ok(records.into_records())
    }

    async fn get_json<R: DeserializeOwned>(&self, url: Url, operation: &str) -> ApiResult<R> {
        let response = self.send(self.client.get(url.clone()), operation, &url).await?;
        let body = Self::read_body(response, operation, &url).await?;
        Self::decode(&body, operation, &url)
    }

    /// Posts `request_body` and decodes the created record. Fields the
    /// backend leaves out of its answer are taken from `fallback`.
    async fn post_created<T, R>(&self, url: Url, request_body: &T, fallback: Value, operation: &str) -> ApiResult<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.client.post(url.clone()).json(request_body);
        let response = self.send(request, operation, &url).await?;
        let body = Self::read_body(response, operation, &url).await?;
        let answer: Value = Self::decode(&body, operation, &url)?;
        let merged = Self::merge_missing(answer, fallback);
        serde_json::from_value(merged).map_err(|e| {
            log::error!("Created record for {} is incomplete: {}", operation, e);
            ApiError::decode(operation, Some(url.as_str()), &e.to_string())
        })
    }

    fn merge_missing(answer: Value, fallback: Value) -> Value {
        match (answer, fallback) {
            (Value::Object(mut answer), Value::Object(fallback)) => {
                for (key, value) in fallback {
                    answer.entry(key).or_insert(value);
                }
                Value::Object(answer)
            }
            (answer, _) => answer,
        }
    }

    async fn delete(&self, url: Url, operation: &str) -> ApiResult<()> {
        self.send(self.client.delete(url.clone()), operation, &url).await?;
        Ok(())
    }

    fn decode_ack(body: &[u8], operation: &str, url: &Url) -> ApiResult<ScanStartAck> {
        let text = String::from_utf8_lossy(body);
        if text.trim().is_empty() {
            return Ok(ScanStartAck::default());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => serde_json::from_value(Value::Object(map)).map_err(|e| {
                ApiError::decode(operation, Some(url.as_str()), &e.to_string())
            }),
            Ok(Value::String(message)) => Ok(ScanStartAck { scan_id: None, message: Some(message) }),
            Ok(other) => Ok(ScanStartAck { scan_id: None, message: Some(other.to_string()) }),
            Err(_) => Ok(ScanStartAck { scan_id: None, message: Some(text.trim().to_string()) }),
        }
    }
}

#[async_trait]
impl ScanApi for HttpScanApi {

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let url = self.endpoint(PROJECTS_PATH, &[])?;
        self.get_list(url, "list projects").await
    }

    async fn get_project(&self, project_id: &ProjectId) -> ApiResult<Project> {
        let url = self.endpoint(PROJECTS_PATH, &[project_id.as_str()])?;
        self.get_json(url, "get project").await
    }

    async fn create_project(&self, project: &NewProject) -> ApiResult<Project> {
        let url = self.endpoint(CREATE_PROJECT_PATH, &[])?;
        let mut fallback = Map::new();
        fallback.insert("name".to_string(), Value::String(project.name.clone()));
        fallback.insert("description".to_string(), Value::String(project.description.clone()));
        self.post_created(url, project, Value::Object(fallback), "create project").await
    }

    async fn delete_project(&self, project_id: &ProjectId) -> ApiResult<()> {
        let url = self.endpoint(PROJECTS_PATH, &[project_id.as_str()])?;
        self.delete(url, "delete project").await
    }

    async fn list_scans(&self, project_filter: Option<ProjectId>) -> ApiResult<Vec<Scan>> {
        let mut url = self.endpoint(SCANS_PATH, &[])?;
        if let Some(project_id) = project_filter {
            url.query_pairs_mut().append_pair("projectId", project_id.as_str());
        }
        self.get_list(url, "list scans").await
    }

    async fn get_scans_by_project(&self, project_id: &ProjectId) -> ApiResult<Vec<Scan>> {
        let url = self.endpoint(SCANS_PATH, &["project", project_id.as_str()])?;
        self.get_list(url, "list project scans").await
    }

    async fn create_scan(&self, request: &ScanRequest) -> ApiResult<Scan> {
        let url = self.endpoint(SCANS_PATH, &[])?;
        let fallback = serde_json::to_value(request)?;
        self.post_created(url, request, fallback, "trigger scan").await
    }

    async fn delete_scan(&self, scan_id: &ScanId) -> ApiResult<()> {
        let url = self.endpoint(SCANS_PATH, &[scan_id.as_str()])?;
        self.delete(url, "delete scan").await
    }

    async fn upload_scan_file(&self, project_id: &ProjectId, upload: &ScanUpload) -> ApiResult<ScanStartAck> {
        let operation = "upload scan file";
        let url = self.endpoint(SCAN_START_PATH, &[])?;

        let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        if let Some(mime_type) = &upload.mime_type {
            part = part.mime_str(mime_type)
                .map_err(|e| ApiError::network(operation, Some(url.as_str()), &format!("invalid MIME type: {}", e)))?;
        }
        let form = Form::new()
            .part("file", part)
            .text("projectId", project_id.to_string());

        log::info!("Uploading '{}' ({} bytes) for project {}", upload.file_name, upload.len(), project_id);
        let response = self.send(self.client.post(url.clone()).multipart(form), operation, &url).await?;
        let body = Self::read_body(response, operation, &url).await?;
        Self::decode_ack(&body, operation, &url)
    }

    async fn list_reports(&self) -> ApiResult<Vec<ReportRecord>> {
        let url = self.endpoint(&self.reports_path, &[])?;
        self.get_list(url, "list reports").await
    }
}
