//! Plant identification page: upload a photo, get candidate species.
//!
//! The photo goes up as multipart form data, which is why the HTTP client
//! passes form payloads through without setting a content type (the browser
//! must pick the multipart boundary).

use leptos::html;
use leptos::prelude::*;
use web_sys::FormData;

use crate::net::api;
use crate::net::types::IdentificationMatch;

/// Identification page — session-gated by the route guard.
#[component]
pub fn IdentifyPage() -> impl IntoView {
    let file_input = NodeRef::<html::Input>::new();
    let matches = RwSignal::new(Vec::<IdentificationMatch>::new());
    let pending = RwSignal::new(false);
    let failed = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(form) = FormData::new() else {
            return;
        };
        if form.append_with_blob("photo", &file).is_err() {
            return;
        }

        pending.set(true);
        failed.set(false);
        leptos::task::spawn_local(async move {
            match api::post_form("/plants/identify", form).await {
                Ok(Some(value)) => {
                    matches.set(serde_json::from_value(value).unwrap_or_default());
                }
                Ok(None) => matches.set(Vec::new()),
                Err(err) => {
                    log::error!("identification failed: {err}");
                    failed.set(true);
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="identify-page">
            <h1>"Identify a Plant"</h1>
            <form class="identify-page__form" on:submit=submit>
                <input type="file" accept="image/*" node_ref=file_input/>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Identifying..." } else { "Identify" }}
                </button>
            </form>
            <Show when=move || failed.get()>
                <p class="identify-page__error">"Identification failed. Try another photo."</p>
            </Show>
            <Show when=move || !matches.get().is_empty()>
                <ul class="identify-page__matches">
                    {move || {
                        matches
                            .get()
                            .into_iter()
                            .map(|m| {
                                let label = m.common_name.unwrap_or_else(|| m.species.clone());
                                let percent = format!("{:.0}%", m.score * 100.0);
                                view! {
                                    <li class="identify-page__match">
                                        <span class="identify-page__name">{label}</span>
                                        <span class="identify-page__species">{m.species}</span>
                                        <span class="identify-page__score">{percent}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
