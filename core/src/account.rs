//! Account creation and login.
//!
//! Both are thin collaborators: the form data is validated locally, sent as
//! JSON, and the server's `message` is shown when it rejects the request.

use serde::{Deserialize, Serialize};

use crate::error::{AccountError, AccountResult};

/// Endpoint that creates a user.
pub const USERS_PATH: &str = "/api/users";

/// Endpoint that exchanges credentials for a session token.
pub const AUTH_PATH: &str = "/api/auth";

/// Signup form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Every field is required and the email needs an `@`.
    pub fn validate(&self) -> AccountResult<()> {
        require("First Name", &self.first_name)?;
        require("Last Name", &self.last_name)?;
        require_email(&self.email)?;
        require("Password", &self.password)
    }
}

/// Login form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> AccountResult<()> {
        require_email(&self.email)?;
        require("Password", &self.password)
    }
}

fn require(field: &str, value: &str) -> AccountResult<()> {
    if value.trim().is_empty() {
        return Err(AccountError::Invalid(format!("{} is required", field)));
    }
    Ok(())
}

fn require_email(email: &str) -> AccountResult<()> {
    require("Email", email)?;
    if !email.contains('@') {
        return Err(AccountError::Invalid(format!("'{}' is not a valid email", email)));
    }
    Ok(())
}

/// Error body returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull the `message` field out of an error body, if it is JSON and has one.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message)
}

/// Successful login body: the token travels in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub data: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Backend operations behind the signup and login forms.
#[allow(async_fn_in_trait)]
pub trait AccountClient {
    async fn create_user(&self, user: &NewUser) -> AccountResult<()>;

    /// Returns the session token.
    async fn login(&self, credentials: &Credentials) -> AccountResult<String>;
}

/// What the signup form does next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    NavigateToLogin,
    ShowError(String),
}

/// What the login form does next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Store the token in the auth context and leave the login page.
    Authenticated(String),
    ShowError(String),
}

pub async fn sign_up<C: AccountClient>(client: &C, user: &NewUser) -> SignupOutcome {
    if let Err(e) = user.validate() {
        return SignupOutcome::ShowError(e.user_message());
    }

    match client.create_user(user).await {
        Ok(()) => {
            log::info!("Account created for {}", user.email);
            SignupOutcome::NavigateToLogin
        }
        Err(e) => {
            log::warn!("Signup failed: {:?}", e);
            SignupOutcome::ShowError(e.user_message())
        }
    }
}

pub async fn log_in<C: AccountClient>(client: &C, credentials: &Credentials) -> LoginOutcome {
    if let Err(e) = credentials.validate() {
        return LoginOutcome::ShowError(e.user_message());
    }

    match client.login(credentials).await {
        Ok(token) if !token.is_empty() => LoginOutcome::Authenticated(token),
        Ok(_) => {
            LoginOutcome::ShowError(AccountError::Unexpected("empty token".into()).user_message())
        }
        Err(e) => {
            log::warn!("Login failed: {:?}", e);
            LoginOutcome::ShowError(e.user_message())
        }
    }
}
