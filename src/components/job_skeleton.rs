//! Loading placeholder for the job feed.

use leptos::prelude::*;

/// Grey placeholder cards shown while a page of jobs is in flight.
#[component]
pub fn JobSkeleton() -> impl IntoView {
    view! {
        <div class="job-skeleton" aria-hidden="true">
            {(0..3)
                .map(|_| {
                    view! {
                        <div class="job-skeleton__card">
                            <div class="job-skeleton__line job-skeleton__line--title"></div>
                            <div class="job-skeleton__line"></div>
                            <div class="job-skeleton__line job-skeleton__line--short"></div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
