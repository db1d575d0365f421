//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page shown to everyone; the call to action depends on whether a
/// session is active.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let logged_in = move || auth.get().is_authenticated();

    view! {
        <div class="home-page">
            <h1>"Plantasy"</h1>
            <p>"Identify plants from a photo, grow your collection, and explore what others have found."</p>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a href="/signup" class="home-page__cta">"Get started"</a>
                    }
                }
            >
                <a href="/identify" class="home-page__cta">"Identify a plant"</a>
            </Show>
        </div>
    }
}
