//! UI components for the project dashboard.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with logout
//! - [`Footer`] - Page footer
//! - [`NoticesPanel`] - Timestamped notifications
//!
//! # Dashboard Components
//! - [`ProjectList`] - Selectable project catalog
//! - [`ProjectInfo`] - Detail panel for the selection
//! - [`UploadSection`] - Drop zone, previews and upload button

mod footer;
mod header;
mod notices;
mod projects;
mod upload;

pub use footer::*;
pub use header::*;
pub use notices::*;
pub use projects::*;
pub use upload::*;
