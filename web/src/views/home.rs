use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::admin::platform_stats;
use crate::utils::format::format_count;

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = Resource::new(
        || (),
        |_| async move {
            platform_stats()
                .await
                .ok()
                .and_then(|envelope| envelope.data)
        },
    );

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1 class="home-hero__title">"Your network outlasts your degree"</h1>
                <p class="home-hero__lede">
                    "Alumnet connects students, alumni and recruiters: real openings, real
                     mentors, and field notes from people a few years ahead of you."
                </p>
                <div class="home-hero__actions">
                    <A href="/signup" attr:class="home-hero__cta">
                        "Join the network"
                    </A>
                    <A href="/jobs" attr:class="home-hero__secondary">
                        "Browse jobs"
                    </A>
                </div>
            </section>

            <Suspense fallback=move || view! {
                <div class="home-stats home-stats--loading">
                    <p>"Loading community stats..."</p>
                </div>
            }>
                {move || stats.get().map(|stats| match stats {
                    Some(stats) => view! {
                        <div class="home-stats">
                            <div class="home-stats__item">
                                <span class="home-stats__value">{format_count(stats.total_members)}</span>
                                <span class="home-stats__label">"members"</span>
                            </div>
                            <div class="home-stats__item">
                                <span class="home-stats__value">{format_count(stats.active_jobs)}</span>
                                <span class="home-stats__label">"open roles"</span>
                            </div>
                            <div class="home-stats__item">
                                <span class="home-stats__value">{format_count(stats.open_mentorships)}</span>
                                <span class="home-stats__label">"active mentorships"</span>
                            </div>
                            <div class="home-stats__item">
                                <span class="home-stats__value">{format_count(stats.capsules_published)}</span>
                                <span class="home-stats__label">"knowledge capsules"</span>
                            </div>
                        </div>
                    }
                        .into_any(),
                    None => view! { <div class="home-stats home-stats--unavailable"></div> }.into_any(),
                })}
            </Suspense>

            <section class="home-features">
                <A href="/jobs" attr:class="home-feature">
                    <div class="home-feature__icon">"💼"</div>
                    <h2>"Job Board"</h2>
                    <p>"Openings posted by alumni who will actually read your application."</p>
                </A>
                <A href="/mentorship" attr:class="home-feature">
                    <div class="home-feature__icon">"🤝"</div>
                    <h2>"Mentorship"</h2>
                    <p>"Request an introduction to alumni in the field you want to enter."</p>
                </A>
                <A href="/knowledge" attr:class="home-feature">
                    <div class="home-feature__icon">"📚"</div>
                    <h2>"Knowledge Capsules"</h2>
                    <p>"Short, practical write-ups: interview prep, salary talk, first-job advice."</p>
                </A>
            </section>
        </div>
    }
}
