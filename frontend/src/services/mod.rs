//! Browser collaborators.
//!
//! - [`api`] - gloo-net client for `/api/files`, `/api/users`, `/api/auth`
//! - [`preview`] - Object URLs for image thumbnails
//! - [`session`] - Session token in localStorage
//! - [`picker`] - `FileList` to upload candidates

pub mod api;
pub mod picker;
pub mod preview;
pub mod session;

pub use api::*;
pub use picker::*;
pub use preview::*;
pub use session::*;
