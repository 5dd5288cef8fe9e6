use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::job_card::JobCard;
use crate::components::notifications::use_notices;
use crate::components::{EmptyState, ErrorPanel, LoadingView};
use crate::hooks::fetch::use_fetch;
use crate::services::envelope_or_error;
use crate::services::jobs::{apply_to_job, list_job_postings};
use crate::utils::filter::{self, FilterCriteria, SortKey};
use crate::utils::storage::use_session;

#[component]
pub fn JobBoard() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let jobs = use_fetch(move || async move { envelope_or_error(list_job_postings().await) });
    let state = jobs.state;

    // Initial load
    Effect::new(move |_| jobs.run());

    let search = RwSignal::new(String::new());
    let category = RwSignal::new("all".to_string());
    let remote_only = RwSignal::new(false);
    let sort = RwSignal::new("recent".to_string());
    let applied = RwSignal::new(HashSet::<i64>::new());

    let visible = Memo::new(move |_| {
        let records = state.with(|s| s.data.clone()).unwrap_or_default();
        let criteria = FilterCriteria::new()
            .search("search", &search.get())
            .is("category", &category.get())
            .flag("remote", remote_only.get().then_some(true));
        let sort_key = match sort.get().as_str() {
            "name" => SortKey::Name,
            "popular" => SortKey::Popular,
            _ => SortKey::Recent,
        };
        filter::apply(&records, &criteria, sort_key)
    });

    let handle_apply = Callback::new(move |job_id: i64| {
        let Some(user) = session.current_user_untracked() else {
            notices.error("Sign in to apply for jobs.");
            return;
        };
        spawn_local(async move {
            let response = envelope_or_error(apply_to_job(job_id, user.name).await);
            if response.success {
                applied.update(|set| {
                    set.insert(job_id);
                });
                state.update(|s| {
                    if let Some(list) = &mut s.data {
                        if let Some(job) = list.iter_mut().find(|job| job.id == job_id) {
                            job.applicant_count += 1;
                        }
                    }
                });
                notices.success("Application submitted");
            } else {
                notices.error(
                    response
                        .message
                        .unwrap_or_else(|| "Could not submit your application.".to_string()),
                );
            }
        });
    });

    view! {
        <div class="job-board">
            <div class="job-board__header">
                <h1>"Job Board"</h1>
                <p class="job-board__subtitle">
                    "Openings shared by alumni and partner employers"
                </p>
            </div>

            <div class="job-board__filters">
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Search title, company or location"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="all">"All categories"</option>
                    <option value="engineering">"Engineering"</option>
                    <option value="data">"Data"</option>
                    <option value="design">"Design"</option>
                    <option value="product">"Product"</option>
                </select>
                <label class="filter-flag">
                    <input
                        type="checkbox"
                        prop:checked=move || remote_only.get()
                        on:change=move |ev| remote_only.set(event_target_checked(&ev))
                    />
                    "Remote only"
                </label>
                <select
                    class="filter-select"
                    on:change=move |ev| sort.set(event_target_value(&ev))
                >
                    <option value="recent">"Most Recent"</option>
                    <option value="popular">"Most Popular"</option>
                    <option value="name">"Name (A-Z)"</option>
                </select>
            </div>

            <Show
                when=move || state.with(|s| s.loading)
                fallback=move || view! {
                    <Show
                        when=move || state.with(|s| s.error.is_some())
                        fallback=move || view! {
                            <Show
                                when=move || !visible.get().is_empty()
                                fallback=move || view! {
                                    <EmptyState
                                        title="No matching jobs".to_string()
                                        hint="Try clearing a filter or broadening your search.".to_string()
                                    />
                                }
                            >
                                <div class="job-board__list">
                                    {move || visible.get().into_iter().map(|job| {
                                        let is_applied = applied.with(|set| set.contains(&job.id));
                                        view! {
                                            <JobCard job=job applied=is_applied on_apply=handle_apply />
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        }
                    >
                        <ErrorPanel
                            message=state.with(|s| s.error.clone())
                            on_retry=jobs.retry()
                        />
                    </Show>
                }
            >
                <LoadingView message=Some("Loading job postings...".to_string()) />
            </Show>
        </div>
    }
}
