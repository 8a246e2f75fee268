use dashboard_core::{ProjectId, DASHBOARD_PATH, DEFAULT_CATALOG};
use leptos::*;
use leptos_router::*;

#[component]
pub fn ProjectDetailsPage(id: ProjectId) -> impl IntoView {
    let project = DEFAULT_CATALOG.iter().find(|p| p.id == id).cloned();

    view! {
        <section class="project-details">
            {match project {
                Some(project) => view! {
                    <h1>{project.name.clone()}</h1>
                    <p>{project.summary()}</p>
                    <p class="project-id">"Project #" {project.id.to_string()}</p>
                }
                .into_view(),
                None => view! { <h1>{format!("Project #{} not found", id)}</h1> }.into_view(),
            }}
            <A href=DASHBOARD_PATH class="details-link">"Back to dashboard"</A>
        </section>
    }
}
