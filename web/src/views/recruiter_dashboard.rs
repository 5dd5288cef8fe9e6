use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::stat_tile::StatTile;
use crate::components::{EmptyState, ErrorPanel, LoadingView};
use crate::hooks::fetch::use_fetch;
use crate::hooks::poll::use_polling;
use crate::services::envelope_or_error;
use crate::services::jobs::{recruiter_postings, recruiter_stats, talent_heatmap};
use crate::utils::format::{date_label, format_count};
use crate::utils::storage::use_session;

const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

#[component]
pub fn RecruiterDashboard() -> impl IntoView {
    let session = use_session();

    let company = move || {
        session
            .current_user_untracked()
            .and_then(|user| user.company)
            .unwrap_or_default()
    };

    let stats = use_fetch(move || {
        let company = company();
        async move { envelope_or_error(recruiter_stats(company).await) }
    });
    let stats_state = stats.state;

    let postings = use_fetch(move || {
        let company = company();
        async move { envelope_or_error(recruiter_postings(company).await) }
    });
    let postings_state = postings.state;

    let heatmap = Resource::new(
        || (),
        |_| async move {
            talent_heatmap()
                .await
                .ok()
                .and_then(|envelope| envelope.data)
                .unwrap_or_default()
        },
    );

    // First load once the session user is known, then keep applicant counts
    // fresh on an interval.
    Effect::new(move |_| {
        if session.current_user().is_some() {
            stats.run();
            postings.run();
        }
    });
    use_polling(
        move || {
            stats.run();
            postings.run();
        },
        REFRESH_INTERVAL,
    );

    view! {
        <div class="dashboard recruiter-dashboard">
            <div class="dashboard__header">
                <h1>"Recruiter Dashboard"</h1>
                <p class="dashboard__subtitle">
                    {move || match session.current_user().and_then(|user| user.company) {
                        Some(company) => format!("Postings and pipeline for {company}"),
                        None => "Sign in with a recruiter account to manage postings".to_string(),
                    }}
                </p>
            </div>

            {move || stats_state.with(|s| s.data.clone()).map(|stats| view! {
                <div class="dashboard__grid">
                    <StatTile
                        title="Open postings".to_string()
                        value=stats.open_postings.to_string()
                        caption="accepting applications".to_string()
                        icon="📋".to_string()
                        accent="purple".to_string()
                    />
                    <StatTile
                        title="Applicants".to_string()
                        value=format_count(stats.total_applicants)
                        caption="across all postings".to_string()
                        icon="👥".to_string()
                        accent="blue".to_string()
                    />
                    <StatTile
                        title="New this week".to_string()
                        value=stats.new_this_week.to_string()
                        caption="fresh applications".to_string()
                        icon="✨".to_string()
                        accent="green".to_string()
                    />
                    <StatTile
                        title="Profile views".to_string()
                        value=format_count(stats.profile_views)
                        caption="last 30 days".to_string()
                        icon="📈".to_string()
                        accent="orange".to_string()
                    />
                </div>
            })}

            <section class="dashboard__panel">
                <h2>"Your postings"</h2>
                <Show
                    when=move || postings_state.with(|s| s.loading && s.data.is_none())
                    fallback=move || view! {
                        <Show
                            when=move || postings_state.with(|s| s.error.is_some())
                            fallback=move || view! {
                                <Show
                                    when=move || postings_state.with(|s| {
                                        s.data.as_ref().map(|list| !list.is_empty()).unwrap_or(false)
                                    })
                                    fallback=move || view! {
                                        <EmptyState
                                            title="No postings yet".to_string()
                                            hint="Your published roles and their applicant counts will appear here.".to_string()
                                        />
                                    }
                                >
                                    <table class="postings-table">
                                        <thead>
                                            <tr>
                                                <th>"Role"</th>
                                                <th>"Posted"</th>
                                                <th>"Status"</th>
                                                <th>"Applicants"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {move || postings_state.with(|s| s.data.clone()).unwrap_or_default()
                                                .into_iter().map(|job| {
                                                    let status_class = format!(
                                                        "postings-table__status postings-table__status--{}",
                                                        job.status
                                                    );
                                                    view! {
                                                        <tr>
                                                            <td class="postings-table__title">{job.title.clone()}</td>
                                                            <td>{date_label(&job.posted_at)}</td>
                                                            <td><span class=status_class>{job.status.clone()}</span></td>
                                                            <td>{job.applicant_count}</td>
                                                        </tr>
                                                    }
                                                }).collect_view()}
                                        </tbody>
                                    </table>
                                </Show>
                            }
                        >
                            <ErrorPanel
                                message=postings_state.with(|s| s.error.clone())
                                on_retry=postings.retry()
                            />
                        </Show>
                    }
                >
                    <LoadingView message=Some("Loading postings...".to_string()) />
                </Show>
            </section>

            <section class="dashboard__panel">
                <h2>"Talent heatmap"</h2>
                <p class="dashboard__panel-note">
                    "Where candidates matching your open roles are concentrated"
                </p>
                <Suspense fallback=move || view! { <p class="dashboard__loading">"Loading heatmap..."</p> }>
                    {move || heatmap.get().map(|cells| view! {
                        <div class="heatmap">
                            {cells.into_iter().map(|cell| {
                                let opacity = cell.intensity.clamp(0.15, 1.0);
                                view! {
                                    <div
                                        class="heatmap__cell"
                                        style=format!("--heat: {opacity}")
                                    >
                                        <span class="heatmap__region">{cell.region.clone()}</span>
                                        <span class="heatmap__count">
                                            {format!("{} candidates", format_count(cell.candidates))}
                                        </span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    })}
                </Suspense>
            </section>

            <Show when=move || session.current_user().is_none()>
                <div class="dashboard__signin-note">
                    <p>"This area is for recruiter accounts."</p>
                    <A href="/login">"Sign In"</A>
                </div>
            </Show>
        </div>
    }
}
