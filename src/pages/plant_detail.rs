//! Single-plant detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::PlantDetail;

/// Fetch one plant; `None` covers both "not found" and transport failures.
async fn fetch_plant(id: String) -> Option<PlantDetail> {
    match api::get(&format!("/plants/{id}")).await {
        Ok(Some(value)) => serde_json::from_value(value).ok(),
        Ok(None) => None,
        Err(err) => {
            log::error!("failed to load plant {id}: {err}");
            None
        }
    }
}

/// Detail page for `/plants/:id` — session-gated by the route guard.
#[component]
pub fn PlantDetailPage() -> impl IntoView {
    let params = use_params_map();
    let plant_id = move || params.read().get("id").unwrap_or_default();

    let plant = LocalResource::new(move || fetch_plant(plant_id()));

    view! {
        <div class="plant-detail-page">
            <a href="/plants" class="plant-detail-page__back">"\u{2190} My Collection"</a>
            <Suspense fallback=move || view! { <p>"Loading plant..."</p> }>
                {move || {
                    plant
                        .get()
                        .map(|record| match record {
                            Some(plant) => {
                                view! {
                                    <article class="plant-detail-page__card">
                                        <h1>{plant.name}</h1>
                                        {plant
                                            .species
                                            .map(|s| view! { <p class="plant-detail-page__species">{s}</p> })}
                                        {plant
                                            .image_url
                                            .map(|url| view! { <img class="plant-detail-page__photo" src=url/> })}
                                        {plant.description.map(|d| view! { <p>{d}</p> })}
                                    </article>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"This plant could not be loaded."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
