use leptos::prelude::*;
use shared_types::Capsule;

use crate::components::engage_button::EngageButton;
use crate::hooks::optimistic::EngagementKind;
use crate::utils::format::date_label;

#[component]
pub fn CapsuleCard(
    capsule: Capsule,
    on_like_delta: Callback<i64>,
    on_bookmark_delta: Callback<i64>,
) -> impl IntoView {
    view! {
        <article class="capsule-card">
            <div class="capsule-card__meta">
                <span class="capsule-card__topic">{capsule.topic.clone()}</span>
                <span class="capsule-card__author">{capsule.author.clone()}</span>
                <span class="capsule-card__date">{date_label(&capsule.created_at)}</span>
            </div>
            <h3 class="capsule-card__title">{capsule.title.clone()}</h3>
            <p class="capsule-card__body">{capsule.body.clone()}</p>
            <div class="capsule-card__actions">
                <EngageButton
                    capsule_id=capsule.id
                    kind=EngagementKind::Like
                    count=capsule.like_count
                    on_delta=on_like_delta
                />
                <EngageButton
                    capsule_id=capsule.id
                    kind=EngagementKind::Bookmark
                    count=capsule.bookmark_count
                    on_delta=on_bookmark_delta
                />
            </div>
        </article>
    }
}
