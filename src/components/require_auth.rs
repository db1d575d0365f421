//! Route guard for session-gated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Parent route wrapping the session-gated pages.
///
/// Nothing renders while the persisted session is still being restored, so
/// a visitor who is about to be authenticated is not bounced away. Once
/// restoration settles, an anonymous visitor is redirected to the landing
/// page and an authenticated one sees the nested route.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect only after restoration has settled.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || {
            let state = auth.get();
            !state.loading && state.is_authenticated()
        }>
            <Outlet/>
        </Show>
    }
}
