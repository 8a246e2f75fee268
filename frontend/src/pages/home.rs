use dashboard_core::{DASHBOARD_PATH, DEFAULT_CATALOG};
use leptos::*;
use leptos_router::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">"Project Dashboard"</h1>
            <p class="hero-subtitle">
                {format!("{} projects ready for images and PDFs.", DEFAULT_CATALOG.len())}
            </p>
            <A href=DASHBOARD_PATH class="hero-cta">"Open the dashboard"</A>
        </section>
    }
}
