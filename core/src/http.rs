//! reqwest collaborator for native drivers.
//!
//! | Method | Path         | Body                                   |
//! |--------|--------------|----------------------------------------|
//! | POST   | `/api/files` | multipart: `file` (repeated), `projectId` |
//! | POST   | `/api/users` | JSON [`NewUser`]                        |
//! | POST   | `/api/auth`  | JSON [`Credentials`]                    |

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::account::{
    parse_error_message, AccountClient, Credentials, LoginResponse, NewUser, AUTH_PATH, USERS_PATH,
};
use crate::config::ApiConfig;
use crate::error::{AccountError, AccountResult, UploadError, UploadResult};
use crate::upload::{UploadClient, UploadPayload, FILE_FIELD, PROJECT_ID_FIELD, UPLOAD_PATH};

/// HTTP client for the dashboard backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn build_form(payload: &UploadPayload<PathBuf>) -> UploadResult<Form> {
        let mut form = Form::new();

        for file in &payload.files {
            let bytes = tokio::fs::read(&file.handle).await.map_err(|e| UploadError::File {
                name: file.name.clone(),
                message: e.to_string(),
            })?;

            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| UploadError::File {
                    name: file.name.clone(),
                    message: e.to_string(),
                })?;

            form = form.part(FILE_FIELD, part);
        }

        Ok(form.text(PROJECT_ID_FIELD, payload.project_id_field()))
    }
}

impl UploadClient<PathBuf> for HttpBackend {
    async fn upload_files(&self, payload: &UploadPayload<PathBuf>) -> UploadResult<Value> {
        let form = Self::build_form(payload).await?;

        let response = self
            .client
            .post(self.config.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(UploadError::Server {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }

        // The body is opaque; keep non-JSON answers as text
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(body)),
        }
    }
}

impl AccountClient for HttpBackend {
    async fn create_user(&self, user: &NewUser) -> AccountResult<()> {
        let response = self
            .client
            .post(self.config.endpoint(USERS_PATH))
            .json(user)
            .send()
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AccountError::from_response(status.as_u16(), parse_error_message(&body)))
    }

    async fn login(&self, credentials: &Credentials) -> AccountResult<String> {
        let response = self
            .client
            .post(self.config.endpoint(AUTH_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AccountError::Unexpected(e.to_string()))?;

        if !status.is_success() {
            return Err(AccountError::from_response(status.as_u16(), parse_error_message(&body)));
        }

        serde_json::from_str::<LoginResponse>(&body)
            .map(|r| r.data)
            .map_err(|e| AccountError::Unexpected(format!("invalid login response: {}", e)))
    }
}
