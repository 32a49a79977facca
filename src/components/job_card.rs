//! Card component for one job listing.

use leptos::prelude::*;

use crate::net::types::Job;

/// A single job in the feed: title, description, skills, dates, and the
/// budget range with a bid action. Pure presentation; every field is
/// rendered as the server sent it.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let budget = format!("${} - ${}", job.min_budget, job.max_budget);

    view! {
        <article class="job-card">
            <div class="job-card__body">
                <h2 class="job-card__title">{job.title}</h2>
                <p class="job-card__description">{job.description}</p>
                <p class="job-card__skills">{job.skills}</p>
                <div class="job-card__dates">
                    <span class="job-card__posted">{format!("Posted: {}", job.created_at)}</span>
                    <span class="job-card__expires">{format!("Expires: {}", job.expired_at)}</span>
                </div>
            </div>
            <div class="job-card__aside">
                <span class="job-card__budget">{budget}</span>
                <button class="btn btn--primary job-card__bid">"Bid"</button>
            </div>
        </article>
    }
}
