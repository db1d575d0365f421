//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::pages::explorer::ExplorerPage;
use crate::pages::home::HomePage;
use crate::pages::identify::IdentifyPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::plant_detail::PlantDetailPage;
use crate::pages::plants::PlantsPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::{self, AuthState};

/// Root application component.
///
/// Owns the session signal, provides it via context, and sets up the route
/// table: public pages at the top level, session-gated pages under a
/// [`RequireAuth`] parent route, and a wildcard redirect to the 404 page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single owner of the session; everything below reads it via context.
    let auth_state = RwSignal::new(AuthState::restoring());
    provide_context(auth_state);

    // Restore the persisted session once, after mount.
    Effect::new(move || auth::restore(auth_state));

    view! {
        <Title text="Plantasy"/>

        <Router>
            <Navbar/>
            <main class="content">
                <Routes fallback=|| {
                    view! {
                        <Redirect
                            path="/page-not-found"
                            options=NavigateOptions {
                                replace: true,
                                ..Default::default()
                            }
                        />
                    }
                }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>

                    <ParentRoute path=StaticSegment("") view=RequireAuth>
                        <Route path=StaticSegment("identify") view=IdentifyPage/>
                        <Route path=StaticSegment("plants") view=PlantsPage/>
                        <Route
                            path=(StaticSegment("plants"), ParamSegment("id"))
                            view=PlantDetailPage
                        />
                        <Route path=StaticSegment("explorer") view=ExplorerPage/>
                    </ParentRoute>

                    <Route path=StaticSegment("page-not-found") view=NotFoundPage/>
                </Routes>
            </main>
        </Router>
    }
}
