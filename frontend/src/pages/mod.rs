//! Route views.
//!
//! Which page renders for a path is decided by
//! [`dashboard_core::resolve_route`]; see `App`.

mod dashboard;
mod home;
mod login;
mod project_details;
mod signup;

pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use project_details::*;
pub use signup::*;
