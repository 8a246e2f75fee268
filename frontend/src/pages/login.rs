use dashboard_core::{log_in, AuthContext, Credentials, LoginOutcome, HOME_PATH, SIGNUP_PATH};
use leptos::*;
use leptos_router::*;
use web_sys::SubmitEvent;

use crate::services::{store_token, GlooBackend};
use crate::BACKEND_URL;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthContext>>();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        set_pending.set(true);
        spawn_local(async move {
            let backend = GlooBackend::from_url(BACKEND_URL);
            match log_in(&backend, &credentials).await {
                LoginOutcome::Authenticated(token) => {
                    if let Err(e) = store_token(&token) {
                        log::warn!("Session will not survive a reload: {}", e);
                    }
                    log::info!("🔑 Logged in as {}", credentials.email);
                    auth.update(|a| a.login(token));
                    navigate(HOME_PATH, Default::default());
                }
                LoginOutcome::ShowError(message) => {
                    set_error.set(Some(message));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-form">
            <h1>"Login to Your Account"</h1>
            <form on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some() fallback=|| view! {}>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button type="submit" class="auth-button" disabled=move || pending.get()>
                    "Sign In"
                </button>
            </form>
            <p class="auth-switch">
                "New here? " <A href=SIGNUP_PATH>"Sign Up"</A>
            </p>
        </section>
    }
}
