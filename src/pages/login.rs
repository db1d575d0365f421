//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Login form.
///
/// A failed attempt keeps the visitor on the form with a generic message;
/// nothing about the cause is surfaced here.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let failed = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        failed.set(false);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let ok = auth::login(auth, &email.get_untracked(), &password.get_untracked()).await;
            pending.set(false);
            if ok {
                navigate("/plants", NavigateOptions::default());
            } else {
                failed.set(true);
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log In"</h1>
            <form class="auth-page__form" on:submit=submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || failed.get()>
                    <p class="auth-page__error">
                        "Could not log in. Check your details and try again."
                    </p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Logging in..." } else { "Log In" }}
                </button>
            </form>
            <p>
                "No account yet? "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
