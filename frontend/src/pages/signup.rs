use dashboard_core::{sign_up, NewUser, SignupOutcome, LOGIN_PATH};
use leptos::*;
use leptos_router::*;
use web_sys::SubmitEvent;

use crate::services::GlooBackend;
use crate::BACKEND_URL;

/// A text input bound to `value`.
#[component]
fn Field(
    kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            required=true
            prop:value=value
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let user = NewUser {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        set_pending.set(true);
        spawn_local(async move {
            let backend = GlooBackend::from_url(BACKEND_URL);
            match sign_up(&backend, &user).await {
                SignupOutcome::NavigateToLogin => {
                    log::info!("👤 Account created for {}", user.email);
                    navigate(LOGIN_PATH, Default::default());
                }
                SignupOutcome::ShowError(message) => {
                    set_error.set(Some(message));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <section class="auth-form">
            <h1>"Create Account"</h1>
            <form on:submit=on_submit>
                <Field kind="text" placeholder="First Name" value=first_name/>
                <Field kind="text" placeholder="Last Name" value=last_name/>
                <Field kind="email" placeholder="Email" value=email/>
                <Field kind="password" placeholder="Password" value=password/>
                <Show when=move || error.get().is_some() fallback=|| view! {}>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button type="submit" class="auth-button" disabled=move || pending.get()>
                    "Sign Up"
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? " <A href=LOGIN_PATH>"Sign In"</A>
            </p>
        </section>
    }
}
