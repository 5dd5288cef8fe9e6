use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::EmptyState;
use crate::hooks::optimistic::EngagementKind;
use crate::services::knowledge::saved_capsules;
use crate::utils::format::date_label;
use crate::utils::storage::use_session;

/// Bookmarked capsules, resolved from the ids the session store remembers.
#[component]
pub fn SavedCapsules() -> impl IntoView {
    let session = use_session();
    let bookmarks = session.engagement(EngagementKind::Bookmark);

    let bookmark_ids = Memo::new(move |_| bookmarks.with(|ledger| ledger.ids_sorted()));

    let saved = Resource::new(
        move || bookmark_ids.get(),
        |ids| async move {
            if ids.is_empty() {
                return Vec::new();
            }
            saved_capsules(ids)
                .await
                .ok()
                .and_then(|envelope| envelope.data)
                .unwrap_or_default()
        },
    );

    view! {
        <div class="saved-page">
            <div class="saved-page__header">
                <h1>"Saved Capsules"</h1>
                <p class="saved-page__subtitle">"Everything you bookmarked, in one place"</p>
            </div>

            <Show
                when=move || session.current_user().is_some()
                fallback=move || view! {
                    <div class="saved-page__signin">
                        <p>"Sign in to see your bookmarks."</p>
                        <A href="/login" attr:class="saved-page__signin-link">
                            "Sign In"
                        </A>
                    </div>
                }
            >
                <Suspense fallback=move || view! {
                    <div class="saved-page__loading">
                        <p>"Loading your bookmarks..."</p>
                    </div>
                }>
                    {move || {
                        saved.get().map(|capsules| {
                            if capsules.is_empty() {
                                view! {
                                    <EmptyState
                                        title="Nothing saved yet".to_string()
                                        hint="Bookmark capsules in the knowledge feed and they will show up here.".to_string()
                                    />
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="saved-page__list">
                                        {capsules.into_iter().map(|capsule| view! {
                                            <li class="saved-page__item">
                                                <div class="saved-page__item-meta">
                                                    <span class="saved-page__topic">{capsule.topic.clone()}</span>
                                                    <span class="saved-page__date">{date_label(&capsule.created_at)}</span>
                                                </div>
                                                <h3>{capsule.title.clone()}</h3>
                                                <p class="saved-page__author">
                                                    {format!("by {}", capsule.author)}
                                                </p>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </Show>
        </div>
    }
}
