//! Project list and detail panel.

use dashboard_core::{DetailPanel, ProjectEntry, ProjectId, DETAILS_LINK_LABEL};
use leptos::*;
use leptos_router::*;

#[component]
pub fn ProjectList(
    #[prop(into)] projects: Signal<Vec<ProjectEntry>>,
    #[prop(into)] on_select: Callback<ProjectId>,
) -> impl IntoView {
    view! {
        <aside class="project-list">
            <h2>"Projects"</h2>
            <ul>
                <For
                    each=move || projects.get()
                    key=|entry| (entry.id, entry.active)
                    children=move |entry| {
                        let id = entry.id;
                        view! {
                            <li
                                class="project-entry"
                                class:active=entry.active
                                on:click=move |_| on_select.call(id)
                            >
                                {entry.name}
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}

#[component]
pub fn ProjectInfo(#[prop(into)] detail: Signal<DetailPanel>) -> impl IntoView {
    move || match detail.get() {
        DetailPanel::Project {
            title,
            summary,
            details_path,
        } => view! {
            <section class="project-info">
                <h2>{title}</h2>
                <p>{summary}</p>
                <A href=details_path class="details-link">{DETAILS_LINK_LABEL}</A>
            </section>
        }
        .into_view(),
        DetailPanel::Placeholder(text) => view! {
            <section class="project-info placeholder">
                <p>{text}</p>
            </section>
        }
        .into_view(),
    }
}
