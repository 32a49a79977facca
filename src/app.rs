//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::Session;
use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::net::api::ApiClient;
use crate::pages::{jobs::JobsPage, login::LoginPage, register::RegisterPage};
use crate::state::jobs::JobsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session service, the job-feed state, and the API client to
/// all child components, then gates the router on session hydration — the
/// guards never see a half-hydrated session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let jobs = RwSignal::new(JobsState::default());
    let api = ApiClient::new(crate::config::base_url(), session);

    provide_context(session);
    provide_context(jobs);
    provide_context(api);

    // Hydrate the session from durable storage once the client is up.
    // Effects never run during SSR, so the server always renders the
    // loading shell and the browser takes it from there.
    Effect::new(move || session.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="Job Posting Application"/>

        <Show
            when=move || !session.loading()
            fallback=|| view! { <div class="app-loading">"Application loading..."</div> }
        >
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <PublicRoute restricted=true>
                                    <LoginPage/>
                                </PublicRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| {
                            view! {
                                <PublicRoute restricted=true>
                                    <RegisterPage/>
                                </PublicRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("")
                        view=|| {
                            view! {
                                <PrivateRoute>
                                    <JobsPage/>
                                </PrivateRoute>
                            }
                        }
                    />
                </Routes>
            </Router>
        </Show>
    }
}
