use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::stat_tile::StatTile;
use crate::components::LoadingView;
use crate::hooks::optimistic::EngagementKind;
use crate::services::account::{skill_graph, student_stats};
use crate::services::jobs::recommended_jobs;
use crate::utils::format::date_label;
use crate::utils::storage::use_session;

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let session = use_session();
    let bookmarks = session.engagement(EngagementKind::Bookmark);

    let student_name = Memo::new(move |_| {
        session
            .current_user()
            .map(|user| user.name)
            .unwrap_or_default()
    });

    let stats = Resource::new(
        move || student_name.get(),
        |name| async move {
            if name.is_empty() {
                return None;
            }
            student_stats(name)
                .await
                .ok()
                .and_then(|envelope| envelope.data)
        },
    );

    let recommendations = Resource::new(
        || (),
        |_| async move {
            recommended_jobs(4)
                .await
                .ok()
                .and_then(|envelope| envelope.data)
                .unwrap_or_default()
        },
    );

    let skills = Resource::new(
        || (),
        |_| async move {
            skill_graph()
                .await
                .ok()
                .and_then(|envelope| envelope.data)
                .unwrap_or_default()
        },
    );

    view! {
        <div class="dashboard student-dashboard">
            <div class="dashboard__header">
                <h1>"Student Dashboard"</h1>
                <p class="dashboard__subtitle">
                    {move || match session.current_user() {
                        Some(user) => format!("Welcome back, {}", user.name),
                        None => "Sign in to see your progress".to_string(),
                    }}
                </p>
            </div>

            <Suspense fallback=move || view! {
                <LoadingView message=Some("Loading your dashboard...".to_string()) />
            }>
                {move || stats.get().map(|stats| match stats {
                    Some(stats) => view! {
                        <div class="dashboard__grid">
                            <StatTile
                                title="Applications".to_string()
                                value=stats.applications_submitted.to_string()
                                caption="submitted this term".to_string()
                                icon="📨".to_string()
                                accent="purple".to_string()
                            />
                            <StatTile
                                title="Bookmarks".to_string()
                                value=bookmarks.with(|ledger| ledger.len()).to_string()
                                caption="capsules saved".to_string()
                                icon="🔖".to_string()
                                accent="blue".to_string()
                            />
                            <StatTile
                                title="Mentorship".to_string()
                                value=stats.mentorship_status.clone()
                                caption="current status".to_string()
                                icon="🤝".to_string()
                                accent="green".to_string()
                            />
                            <StatTile
                                title="Profile".to_string()
                                value=format!("{}%", stats.profile_completeness)
                                caption="complete".to_string()
                                icon="🧩".to_string()
                                accent="orange".to_string()
                            />
                        </div>
                    }
                        .into_any(),
                    None => view! {
                        <div class="dashboard__signin-note">
                            <p>"Your stats appear here once you sign in."</p>
                            <A href="/login">"Sign In"</A>
                        </div>
                    }
                        .into_any(),
                })}
            </Suspense>

            <div class="dashboard__columns">
                <section class="dashboard__panel">
                    <h2>"Recommended for you"</h2>
                    <Suspense fallback=move || view! { <p class="dashboard__loading">"Loading jobs..."</p> }>
                        {move || recommendations.get().map(|jobs| {
                            if jobs.is_empty() {
                                view! { <p class="dashboard__empty">"No open roles right now."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="dashboard__job-list">
                                        {jobs.into_iter().map(|job| view! {
                                            <li class="dashboard__job">
                                                <div>
                                                    <span class="dashboard__job-title">{job.title.clone()}</span>
                                                    <span class="dashboard__job-company">
                                                        {format!("{} · {}", job.company, job.location)}
                                                    </span>
                                                </div>
                                                <span class="dashboard__job-date">
                                                    {date_label(&job.posted_at)}
                                                </span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })}
                    </Suspense>
                    <A href="/jobs" attr:class="dashboard__panel-link">
                        "See all openings"
                    </A>
                </section>

                <section class="dashboard__panel">
                    <h2>"Skills in demand"</h2>
                    <Suspense fallback=move || view! { <p class="dashboard__loading">"Loading skills..."</p> }>
                        {move || skills.get().map(|nodes| view! {
                            <ul class="skill-graph">
                                {nodes.into_iter().map(|node| view! {
                                    <li class="skill-graph__node">
                                        <div class="skill-graph__head">
                                            <span class="skill-graph__name">{node.skill.clone()}</span>
                                            <span class="skill-graph__weight">{node.weight}</span>
                                        </div>
                                        <div class="skill-graph__bar">
                                            <div
                                                class="skill-graph__fill"
                                                style=format!("width: {}%", node.weight.clamp(0, 100))
                                            ></div>
                                        </div>
                                        <div class="skill-graph__related">
                                            {node.related.join(" · ")}
                                        </div>
                                    </li>
                                }).collect_view()}
                            </ul>
                        })}
                    </Suspense>
                </section>
            </div>
        </div>
    }
}
