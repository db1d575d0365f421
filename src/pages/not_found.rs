//! 404 page.

use leptos::prelude::*;

/// Shown for `/page-not-found` and, via redirect, for any unknown route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}
