//! Navigation bar shown to logged-in users.

use dashboard_core::{AuthContext, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH};
use leptos::*;
use leptos_router::*;

use crate::services::clear_token;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthContext>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        if let Err(e) = clear_token() {
            log::warn!("{}", e);
        }
        auth.update(AuthContext::logout);
        log::info!("👋 Logged out");
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <Show when=move || auth.with(AuthContext::is_authenticated) fallback=|| view! {}>
            <header>
                <div class="header-left">
                    <A href=HOME_PATH class="logo">"PROJECTS"</A>
                    <nav>
                        <A href=HOME_PATH class="nav-link" exact=true>"Home"</A>
                        <A href=DASHBOARD_PATH class="nav-link">"Dashboard"</A>
                    </nav>
                </div>
                <div class="header-right">
                    <button class="logout-button" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </header>
        </Show>
    }
}
