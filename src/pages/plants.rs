//! "My Collection" page listing the user's plants.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::PlantSummary;

/// Fetch the collection; failures degrade to an empty list and a log line.
async fn fetch_plants() -> Vec<PlantSummary> {
    match api::get("/plants").await {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(err) => {
            log::error!("failed to load plants: {err}");
            Vec::new()
        }
    }
}

/// Collection page — session-gated by the surrounding route guard.
#[component]
pub fn PlantsPage() -> impl IntoView {
    let plants = LocalResource::new(|| fetch_plants());

    view! {
        <div class="plants-page">
            <h1>"My Collection"</h1>
            <Suspense fallback=move || view! { <p>"Loading plants..."</p> }>
                {move || {
                    plants
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p>
                                        "No plants yet. "
                                        <a href="/identify">"Identify your first one"</a>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="plants-page__list">
                                        {list
                                            .into_iter()
                                            .map(|plant| {
                                                let href = format!("/plants/{}", plant.id);
                                                view! {
                                                    <li class="plants-page__item">
                                                        <a href=href>{plant.name}</a>
                                                        {plant
                                                            .species
                                                            .map(|s| {
                                                                view! {
                                                                    <span class="plants-page__species">{s}</span>
                                                                }
                                                            })}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
