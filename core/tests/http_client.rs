//! End-to-end checks of the reqwest collaborator against a local axum backend.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use dashboard_core::{
    load_candidates, log_in, sign_up, submit, ApiConfig, Credentials, Dashboard, HttpBackend,
    LoginOutcome, NewUser, NoPreviews, ProjectId, SignupOutcome, UploadState,
    GENERIC_UPLOAD_FAILURE,
};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Uploads larger than this are refused with 413.
const MAX_TEST_UPLOAD: usize = 64;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

#[derive(Debug, Default, Clone)]
struct Received {
    /// (file name, content type, size)
    files: Vec<(String, String, usize)>,
    project_id: Option<String>,
}

type Seen = Arc<Mutex<Vec<Received>>>;

type ApiError = (StatusCode, Json<Value>);

fn bad_request(e: impl ToString) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": e.to_string() })))
}

async fn files(
    State(seen): State<Seen>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut received = Received::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let bytes = field.bytes().await.map_err(bad_request)?;
                received.files.push((file_name, content_type, bytes.len()));
            }
            "projectId" => {
                received.project_id = Some(field.text().await.map_err(bad_request)?);
            }
            _ => {}
        }
    }

    let too_large = received.files.iter().any(|(_, _, size)| *size > MAX_TEST_UPLOAD);
    seen.lock().unwrap().push(received);

    if too_large {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(json!({ "message": "file too large" })),
        ));
    }
    Ok(Json(json!({ "status": "stored" })))
}

async fn users(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        (
            StatusCode::CONFLICT,
            Json(json!({ "message": "User with given email already exists" })),
        )
    } else {
        (
            StatusCode::CREATED,
            Json(json!({ "message": "User created successfully" })),
        )
    }
}

async fn auth(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "secret" {
        (
            StatusCode::OK,
            Json(json!({ "data": "token-123", "message": "logged in successfully" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid Email or Password" })),
        )
    }
}

async fn spawn_backend() -> (HttpBackend, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/files", post(files))
        .route("/api/users", post(users))
        .route("/api/auth", post(auth))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ApiConfig::parse(&format!("http://{}", addr)).unwrap();
    (HttpBackend::new(config), seen)
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn dashboard_for(project: u32, paths: &[PathBuf]) -> RefCell<Dashboard<PathBuf, NoPreviews>> {
    let mut dashboard = Dashboard::new(dashboard_core::default_catalog(), NoPreviews);
    dashboard.select_by_id(ProjectId(project)).unwrap();
    dashboard.stage(load_candidates(paths).unwrap());
    RefCell::new(dashboard)
}

#[tokio::test]
async fn test_upload_sends_files_and_project_id() {
    let (backend, seen) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let photo = write_file(&dir, "photo.png", PNG_MAGIC);
    let plan = write_file(&dir, "plan.pdf", b"%PDF-1.4\n%%EOF");
    let notes = write_file(&dir, "notes.txt", b"not uploaded");

    let dashboard = dashboard_for(3, &[photo, plan, notes]);
    let outcome = submit(&dashboard, &backend).await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(dashboard.borrow().upload_state(), &UploadState::Idle);
    assert!(dashboard.borrow().staged().is_empty());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].project_id.as_deref(), Some("3"));
    assert_eq!(
        seen[0].files,
        vec![
            ("photo.png".to_string(), "image/png".to_string(), PNG_MAGIC.len()),
            ("plan.pdf".to_string(), "application/pdf".to_string(), 14),
        ]
    );
}

#[tokio::test]
async fn test_empty_upload_sends_only_project_id() {
    let (backend, seen) = spawn_backend().await;

    let dashboard = dashboard_for(5, &[]);
    let outcome = submit(&dashboard, &backend).await.unwrap();

    assert!(outcome.is_success());
    let seen = seen.lock().unwrap();
    assert!(seen[0].files.is_empty());
    assert_eq!(seen[0].project_id.as_deref(), Some("5"));
}

#[tokio::test]
async fn test_server_message_is_surfaced_and_files_kept() {
    let (backend, _seen) = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let mut bytes = PNG_MAGIC.to_vec();
    bytes.extend([0u8; 128]);
    let big = write_file(&dir, "huge.png", &bytes);

    let dashboard = dashboard_for(1, &[big]);
    let outcome = submit(&dashboard, &backend).await.unwrap();

    assert_eq!(outcome.terminal_state(), UploadState::Failed("file too large".into()));
    assert_eq!(dashboard.borrow().staged().len(), 1);
    assert_eq!(dashboard.borrow().upload_state(), &UploadState::Idle);
}

#[tokio::test]
async fn test_unreachable_backend_gives_generic_failure() {
    // Grab a free port, then close it so nothing listens there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(ApiConfig::parse(&format!("http://{}", addr)).unwrap());
    let dir = tempfile::tempdir().unwrap();
    let photo = write_file(&dir, "photo.png", PNG_MAGIC);

    let dashboard = dashboard_for(2, &[photo]);
    let outcome = submit(&dashboard, &backend).await.unwrap();

    assert_eq!(
        outcome.terminal_state(),
        UploadState::Failed(GENERIC_UPLOAD_FAILURE.into())
    );
    assert_eq!(dashboard.borrow().staged().len(), 1);
}

#[tokio::test]
async fn test_signup_and_login() {
    let (backend, _seen) = spawn_backend().await;

    let mut user = NewUser {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "secret".into(),
    };
    assert_eq!(sign_up(&backend, &user).await, SignupOutcome::NavigateToLogin);

    user.email = "taken@example.com".into();
    assert_eq!(
        sign_up(&backend, &user).await,
        SignupOutcome::ShowError("User with given email already exists".into())
    );

    let good = Credentials {
        email: "ada@example.com".into(),
        password: "secret".into(),
    };
    assert_eq!(
        log_in(&backend, &good).await,
        LoginOutcome::Authenticated("token-123".into())
    );

    let bad = Credentials {
        password: "wrong".into(),
        ..good
    };
    assert_eq!(
        log_in(&backend, &bad).await,
        LoginOutcome::ShowError("Invalid Email or Password".into())
    );
}
