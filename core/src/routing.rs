//! Route table and the authentication signal that gates it.

use crate::models::ProjectId;

pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const PROJECT_DETAILS_PREFIX: &str = "/project-details/";

/// Session token holder, passed explicitly to the routing layer.
///
/// An empty token counts as logged out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn login(&mut self, token: impl Into<String>) {
        *self = Self::from_token(Some(token.into()));
    }

    pub fn logout(&mut self) {
        self.token = None;
    }
}

/// Views reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Home,
    Dashboard,
    ProjectDetails(ProjectId),
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResolution {
    Render(AppView),
    Redirect(&'static str),
}

/// Link target of a project's detail page.
pub fn project_details_path(id: ProjectId) -> String {
    format!("{}{}", PROJECT_DETAILS_PREFIX, id)
}

/// Strip query, fragment and trailing slashes.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME_PATH
    } else {
        trimmed
    }
}

/// Pick the view for `path`.
///
/// Logged-in users get home, dashboard and project details; everything else
/// goes back home. Logged-out users only get login and signup; everything
/// else, the root included, goes to login.
pub fn resolve_route(path: &str, auth: &AuthContext) -> RouteResolution {
    let path = normalize(path);

    if !auth.is_authenticated() {
        return match path {
            LOGIN_PATH => RouteResolution::Render(AppView::Login),
            SIGNUP_PATH => RouteResolution::Render(AppView::Signup),
            _ => RouteResolution::Redirect(LOGIN_PATH),
        };
    }

    match path {
        HOME_PATH => RouteResolution::Render(AppView::Home),
        DASHBOARD_PATH => RouteResolution::Render(AppView::Dashboard),
        _ => path
            .strip_prefix(PROJECT_DETAILS_PREFIX)
            .and_then(|id| id.parse::<u32>().ok())
            .map(|id| RouteResolution::Render(AppView::ProjectDetails(ProjectId(id))))
            .unwrap_or(RouteResolution::Redirect(HOME_PATH)),
    }
}
