//! Project Dashboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for picking a project and uploading its images
//! and PDFs. State and rules live in `dashboard_core`; this crate renders
//! them and talks to the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, logout)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Screen (resolve_route → page or redirect)                   │
//! │  ├── HomePage                                                │
//! │  ├── DashboardPage                                           │
//! │  │   ├── ProjectList          ├── ProjectInfo                │
//! │  │   └── UploadSection (drop zone, previews, button)         │
//! │  ├── ProjectDetailsPage                                      │
//! │  └── LoginPage / SignupPage                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NoticesPanel                                                │
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - NoticeEntry, AppError
//! - [`components`] - UI components (Header, ProjectList, UploadSection, etc.)
//! - [`pages`] - Route views
//! - [`services`] - Backend client, previews, session storage

use dashboard_core::{resolve_route, AppView, AuthContext, RouteResolution};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, NoticeEntry};

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Project Dashboard - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = create_rw_signal(AuthContext::from_token(load_token()));
    let notices: Notices = create_rw_signal(Vec::new());
    provide_context(auth);
    provide_context(notices);

    view! {
        <Title text="Project Dashboard"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/*any" view=Screen/>
                </Routes>
            </main>
            <NoticesPanel notices=notices/>
            <Footer/>
        </Router>
    }
}

/// Render whatever the route table picks for the current path.
#[component]
fn Screen() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthContext>>();
    let location = use_location();

    let resolution = create_memo(move |_| {
        location
            .pathname
            .with(|path| auth.with(|a| resolve_route(path, a)))
    });

    move || match resolution.get() {
        RouteResolution::Render(page) => match page {
            AppView::Home => view! { <HomePage/> }.into_view(),
            AppView::Dashboard => view! { <DashboardPage/> }.into_view(),
            AppView::ProjectDetails(id) => view! { <ProjectDetailsPage id=id/> }.into_view(),
            AppView::Login => view! { <LoginPage/> }.into_view(),
            AppView::Signup => view! { <SignupPage/> }.into_view(),
        },
        RouteResolution::Redirect(path) => {
            log::debug!("↪️  Redirecting to {}", path);
            view! { <Redirect path=path/> }.into_view()
        }
    }
}
