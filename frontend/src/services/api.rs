//! HTTP client for the dashboard backend, built on gloo-net.

use dashboard_core::{
    parse_error_message, AccountClient, AccountError, AccountResult, ApiConfig, Credentials,
    LoginResponse, NewUser, UploadClient, UploadError, UploadPayload, UploadResult, AUTH_PATH,
    FILE_FIELD, PROJECT_ID_FIELD, UPLOAD_PATH, USERS_PATH,
};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::{File, FormData};

/// Backend client used by the pages.
#[derive(Debug, Clone, Default)]
pub struct GlooBackend {
    config: ApiConfig,
}

impl GlooBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client for `url`, or the default backend if `url` does not parse.
    pub fn from_url(url: &str) -> Self {
        match ApiConfig::parse(url) {
            Ok(config) => Self::new(config),
            Err(e) => {
                log::error!("{}; using {}", e, ApiConfig::default().base_url());
                Self::default()
            }
        }
    }

    fn build_form(payload: &UploadPayload<File>) -> UploadResult<FormData> {
        let form_data = FormData::new()
            .map_err(|e| UploadError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        for file in &payload.files {
            form_data
                .append_with_blob_and_filename(FILE_FIELD, &file.handle, &file.name)
                .map_err(|e| UploadError::File {
                    name: file.name.clone(),
                    message: format!("{:?}", e),
                })?;
        }

        form_data
            .append_with_str(PROJECT_ID_FIELD, &payload.project_id_field())
            .map_err(|e| UploadError::Transport(format!("Failed to append project id: {:?}", e)))?;

        Ok(form_data)
    }
}

async fn body_text(response: &Response) -> String {
    response.text().await.unwrap_or_default()
}

impl UploadClient<File> for GlooBackend {
    async fn upload_files(&self, payload: &UploadPayload<File>) -> UploadResult<Value> {
        let form_data = Self::build_form(payload)?;

        let response = Request::post(&self.config.endpoint(UPLOAD_PATH))
            .body(form_data)
            .map_err(|e| UploadError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let body = body_text(&response).await;
        if !response.ok() {
            return Err(UploadError::Server {
                status: response.status(),
                message: parse_error_message(&body),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(body)),
        }
    }
}

impl AccountClient for GlooBackend {
    async fn create_user(&self, user: &NewUser) -> AccountResult<()> {
        let response = Request::post(&self.config.endpoint(USERS_PATH))
            .json(user)
            .map_err(|e| AccountError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let body = body_text(&response).await;
        Err(AccountError::from_response(response.status(), parse_error_message(&body)))
    }

    async fn login(&self, credentials: &Credentials) -> AccountResult<String> {
        let response = Request::post(&self.config.endpoint(AUTH_PATH))
            .json(credentials)
            .map_err(|e| AccountError::Unexpected(e.to_string()))?
            .send()
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;

        let body = body_text(&response).await;
        if !response.ok() {
            return Err(AccountError::from_response(response.status(), parse_error_message(&body)));
        }

        serde_json::from_str::<LoginResponse>(&body)
            .map(|r| r.data)
            .map_err(|e| AccountError::Unexpected(format!("invalid login response: {}", e)))
    }
}
