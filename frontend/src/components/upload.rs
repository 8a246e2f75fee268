//! File drop zone with picker, preview grid and upload button.

use dashboard_core::{CandidateFile, PreviewEntry, PreviewKind, UploadButton};
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::candidates_from_list;
use crate::{ACCEPTED_FILE_TYPES, THUMBNAIL_SIZE};

#[component]
pub fn UploadSection(
    #[prop(into)] previews: Signal<Vec<PreviewEntry>>,
    #[prop(into)] button: Signal<UploadButton>,
    #[prop(into)] on_files: Callback<Vec<CandidateFile<File>>>,
    #[prop(into)] on_remove: Callback<String>,
    #[prop(into)] on_upload: Callback<()>,
) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files.call(candidates_from_list(&files));
        }
        // Picking the same file again must fire `change`
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files.call(candidates_from_list(&files));
        }
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="upload-section">
            <div
                class="dropzone"
                class:dragging=move || dragging.get()
                on:click=trigger_file_input
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_dragging.set(true);
                }
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drag & drop images or PDFs here"</div>
                <div class="upload-hint">"or click to select files"</div>
                <input
                    type="file"
                    node_ref=file_input
                    accept=ACCEPTED_FILE_TYPES
                    multiple=true
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <PreviewGrid previews=previews on_remove=on_remove/>

            <button
                class="upload-button"
                disabled=move || !button.get().enabled
                on:click=move |_| on_upload.call(())
            >
                {move || button.get().label}
            </button>
        </div>
    }
}

#[component]
pub fn PreviewGrid(
    #[prop(into)] previews: Signal<Vec<PreviewEntry>>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="preview-grid">
            <For
                each=move || previews.get()
                key=|entry| entry.clone()
                children=move |entry| {
                    let name = entry.name.clone();
                    let thumbnail = match entry.kind {
                        PreviewKind::Image { url } => view! {
                            <img
                                src=url
                                alt=entry.name.clone()
                                width=THUMBNAIL_SIZE
                                height=THUMBNAIL_SIZE
                            />
                        }
                        .into_view(),
                        PreviewKind::Named => view! {
                            <div class="file-name">"📄 " {entry.name.clone()}</div>
                        }
                        .into_view(),
                    };
                    view! {
                        <div class="preview-item" title=entry.name.clone()>
                            {thumbnail}
                            <button
                                class="preview-remove"
                                on:click=move |_| on_remove.call(name.clone())
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
