//! Notification panel.
//!
//! Notices are app-wide: an upload that finishes after the user left the
//! dashboard still reports here. Each entry dismisses itself after
//! [`NOTICE_DISMISS_MS`].

use dashboard_core::Notice;
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{NoticeEntry, MAX_NOTICE_ENTRIES, NOTICE_DISMISS_MS};

/// Shared notice list, provided by `App`.
pub type Notices = RwSignal<Vec<NoticeEntry>>;

/// Show `notices` and schedule their dismissal.
pub fn push_notices(target: Notices, notices: Vec<Notice>) {
    for notice in notices {
        log::info!("{}", notice);
        let entry = NoticeEntry::new(notice);
        let id = entry.id;

        target.update(|entries| {
            entries.push(entry);
            if entries.len() > MAX_NOTICE_ENTRIES {
                entries.remove(0);
            }
        });

        Timeout::new(NOTICE_DISMISS_MS, move || {
            // The panel may be gone by now
            let _ = target.try_update(|entries| entries.retain(|e| e.id != id));
        })
        .forget();
    }
}

#[component]
pub fn NoticesPanel(notices: Notices) -> impl IntoView {
    view! {
        <Show when=move || notices.with(|n| !n.is_empty()) fallback=|| view! {}>
            <div class="notices-panel">
                <div class="notices-header">
                    <span class="notices-title">"Notifications"</span>
                    <button class="notices-clear" on:click=move |_| notices.set(vec![])>
                        "Clear"
                    </button>
                </div>
                <div class="notices-content">
                    <For
                        each=move || notices.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let class = format!("notice-entry {}", entry.notice.level.css_class());
                            let id = entry.id;
                            view! {
                                <div class=class>
                                    <span class="notice-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.notice.to_string()}
                                    <button
                                        class="notice-dismiss"
                                        on:click=move |_| notices.update(|n| n.retain(|e| e.id != id))
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
