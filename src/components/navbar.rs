//! Top navigation bar, aware of the session state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::auth::{self, AuthState};

/// Viewport width at which the mobile menu gives way to the inline links.
const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Sticky top navigation.
///
/// Anonymous visitors get Log In / Sign Up; an authenticated session gets
/// Explore, My Collection, and Log Out. The mobile menu collapses on Escape
/// and whenever the viewport returns to desktop width.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    // The navbar mounts once for the app's lifetime, so the forgotten
    // closures do not accumulate.
    if let Some(win) = web_sys::window() {
        let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            if width >= DESKTOP_MIN_WIDTH {
                open.set(false);
            }
        });
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();

        let on_key =
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" {
                    open.set(false);
                }
            });
        let _ = win.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        on_key.forget();
    }

    let logged_in = move || auth.get().is_authenticated();
    let close = move |_| open.set(false);

    // Logging out lands the visitor back on the public home page.
    let do_logout = move || {
        auth::logout(auth);
        open.set(false);
        navigate("/", NavigateOptions::default());
    };
    let logout_desktop = do_logout.clone();
    let logout_mobile = do_logout;

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand" on:click=close>
                    "Plantasy"
                </a>

                <div class="navbar__links">
                    <a href="/" class="navbar__link">"Home"</a>
                    <Show
                        when=logged_in
                        fallback=|| {
                            view! {
                                <a href="/login" class="navbar__link">"Log In"</a>
                                <a href="/signup" class="navbar__link">"Sign Up"</a>
                            }
                        }
                    >
                        <a href="/explorer" class="navbar__link">"Explore"</a>
                        <a href="/plants" class="navbar__link">"My Collection"</a>
                        <button class="navbar__link" on:click={
                            let f = logout_desktop.clone();
                            move |_| f()
                        }>
                            "Log Out"
                        </button>
                    </Show>
                </div>

                <button
                    class="navbar__toggle"
                    aria-controls="mobile-menu"
                    aria-expanded=move || open.get().to_string()
                    aria-label=move || if open.get() { "Close main menu" } else { "Open main menu" }
                    on:click=move |_| open.update(|v| *v = !*v)
                >
                    {move || if open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <div
                id="mobile-menu"
                class="navbar__menu"
                class:navbar__menu--open=move || open.get()
            >
                <a href="/" class="navbar__link" on:click=close>"Home"</a>
                <Show
                    when=logged_in
                    fallback=move || {
                        view! {
                            <a href="/login" class="navbar__link" on:click=close>"Log In"</a>
                            <a href="/signup" class="navbar__link" on:click=close>"Sign Up"</a>
                        }
                    }
                >
                    <a href="/explorer" class="navbar__link" on:click=close>"Explore"</a>
                    <a href="/plants" class="navbar__link" on:click=close>"My Collection"</a>
                    <button class="navbar__link" on:click={
                        let f = logout_mobile.clone();
                        move |_| f()
                    }>
                        "Log Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
