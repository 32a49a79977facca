//! Private job-feed page with incremental load-more pagination.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::job_card::JobCard;
use crate::components::job_skeleton::JobSkeleton;
use crate::state::jobs::{FetchStatus, JobsState};

/// Job feed: fetches the first page on mount and appends a page per
/// load-more click. The fetch state machine lives in [`JobsState`]; this
/// component only triggers transitions and renders the result.
#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::ApiClient>();

    // Fetch the page at the current cursor. `begin_fetch` rejects the
    // trigger while a request is in flight, so a double click or an
    // overlapping retry issues no second request.
    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let mut started = false;
            jobs.update(|s| started = s.begin_fetch());
            if !started {
                return;
            }
            let cursor = jobs.with_untracked(|s| s.cursor);
            leptos::task::spawn_local(async move {
                match api.fetch_jobs(&cursor).await {
                    Ok(page) => jobs.update(|s| s.apply_page(page)),
                    Err(err) => {
                        leptos::logging::warn!("job fetch failed: {err}");
                        jobs.update(|s| s.apply_error(err.to_string()));
                    }
                }
            });
        }
    };

    // Initial page load, once per app lifetime.
    Effect::new(move || {
        if jobs.with_untracked(|s| s.status) == FetchStatus::Idle {
            load();
        }
    });

    let status = move || jobs.get().status;
    let has_jobs = move || !jobs.get().items.is_empty();

    view! {
        <div class="jobs-page">
            <Header/>

            <Show
                when=move || status() != FetchStatus::Failed
                fallback=move || {
                    view! {
                        <div class="jobs-page__fallback">
                            <p>"Something went wrong!"</p>
                            <button class="btn btn--primary" on:click=move |_| load()>
                                "Retry"
                            </button>
                        </div>
                    }
                }
            >
                <div class="jobs-page__list">
                    {move || {
                        jobs.get()
                            .items
                            .into_iter()
                            .map(|job| view! { <JobCard job/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || status() == FetchStatus::Loading>
                    <JobSkeleton/>
                </Show>

                <Show when=has_jobs>
                    <div class="jobs-page__more">
                        <button
                            class="btn btn--primary jobs-page__load-more"
                            prop:disabled=move || status() == FetchStatus::Loading
                            on:click=move |_| load()
                        >
                            "Load More"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
