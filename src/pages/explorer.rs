//! Explorer page showing the community's recent finds.

#[cfg(test)]
#[path = "explorer_test.rs"]
mod explorer_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::PlantSummary;

const EXPLORE_PATH: &str = "/plants/explore";

async fn fetch_explore() -> Vec<PlantSummary> {
    match api::get(EXPLORE_PATH).await {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(err) => {
            log::error!("failed to load explorer feed: {err}");
            Vec::new()
        }
    }
}

/// Explorer feed — session-gated by the route guard.
#[component]
pub fn ExplorerPage() -> impl IntoView {
    let feed = LocalResource::new(|| fetch_explore());

    view! {
        <div class="explorer-page">
            <h1>"Explore"</h1>
            <Suspense fallback=move || view! { <p>"Loading finds..."</p> }>
                {move || {
                    feed.get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"Nothing to explore yet."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="explorer-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|plant| {
                                                view! {
                                                    <div class="explorer-page__card">
                                                        {plant
                                                            .image_url
                                                            .map(|url| {
                                                                view! {
                                                                    <img class="explorer-page__photo" src=url/>
                                                                }
                                                            })}
                                                        <h2>{plant.name}</h2>
                                                        {plant
                                                            .species
                                                            .map(|s| {
                                                                view! {
                                                                    <p class="explorer-page__species">{s}</p>
                                                                }
                                                            })}
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
