use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Button;

use crate::components::capsule_card::CapsuleCard;
use crate::components::notifications::use_notices;
use crate::components::{EmptyState, ErrorPanel, LoadingView};
use crate::hooks::fetch::use_fetch;
use crate::services::envelope_or_error;
use crate::services::knowledge::{create_capsule, list_capsules};
use crate::utils::filter::{self, FilterCriteria, SortKey};
use crate::utils::storage::use_session;

#[component]
pub fn KnowledgeFeed() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let capsules = use_fetch(move || async move { envelope_or_error(list_capsules().await) });
    let state = capsules.state;

    Effect::new(move |_| capsules.run());

    let search = RwSignal::new(String::new());
    let topic = RwSignal::new("all".to_string());
    let sort = RwSignal::new("recent".to_string());

    // Composer state
    let draft_title = RwSignal::new(String::new());
    let draft_topic = RwSignal::new("careers".to_string());
    let draft_body = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        let records = state.with(|s| s.data.clone()).unwrap_or_default();
        let criteria = FilterCriteria::new()
            .search("search", &search.get())
            .is("topic", &topic.get());
        let sort_key = match sort.get().as_str() {
            "popular" => SortKey::Popular,
            _ => SortKey::Recent,
        };
        filter::apply(&records, &criteria, sort_key)
    });

    let submit_capsule = move |_| {
        let Some(user) = session.current_user_untracked() else {
            notices.error("Sign in to share a capsule.");
            return;
        };
        submitting.set(true);
        let title = draft_title.get_untracked();
        let body = draft_body.get_untracked();
        let capsule_topic = draft_topic.get_untracked();
        spawn_local(async move {
            let response =
                envelope_or_error(create_capsule(user.name, title, capsule_topic, body).await);
            if response.success {
                draft_title.set(String::new());
                draft_body.set(String::new());
                notices.success("Capsule submitted for review");
            } else {
                notices.error(
                    response
                        .message
                        .unwrap_or_else(|| "Could not submit your capsule.".to_string()),
                );
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="knowledge-feed">
            <div class="knowledge-feed__header">
                <h1>"Knowledge Capsules"</h1>
                <p class="knowledge-feed__subtitle">
                    "Short write-ups from alumni: interview prep, career moves, field notes"
                </p>
            </div>

            <Show when=move || session.current_user().is_some()>
                <div class="capsule-composer">
                    <h2>"Share a capsule"</h2>
                    <input
                        class="filter-input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || draft_title.get()
                        on:input=move |ev| draft_title.set(event_target_value(&ev))
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| draft_topic.set(event_target_value(&ev))
                    >
                        <option value="careers">"Careers"</option>
                        <option value="finance">"Finance"</option>
                        <option value="design">"Design"</option>
                        <option value="data">"Data"</option>
                        <option value="campus">"Campus"</option>
                    </select>
                    <textarea
                        class="capsule-composer__body"
                        placeholder="What did you learn?"
                        prop:value=move || draft_body.get()
                        on:input=move |ev| draft_body.set(event_target_value(&ev))
                    ></textarea>
                    <Button
                        on_click=submit_capsule
                        disabled=Signal::derive(move || {
                            submitting.get()
                                || draft_title.get().trim().is_empty()
                                || draft_body.get().trim().is_empty()
                        })
                    >
                        "Submit for review"
                    </Button>
                    <p class="capsule-composer__note">
                        "New capsules appear in the feed once a moderator approves them."
                    </p>
                </div>
            </Show>

            <div class="knowledge-feed__filters">
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Search capsules"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| topic.set(event_target_value(&ev))
                >
                    <option value="all">"All topics"</option>
                    <option value="careers">"Careers"</option>
                    <option value="finance">"Finance"</option>
                    <option value="design">"Design"</option>
                    <option value="data">"Data"</option>
                    <option value="campus">"Campus"</option>
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| sort.set(event_target_value(&ev))
                >
                    <option value="recent">"Most Recent"</option>
                    <option value="popular">"Most Popular"</option>
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
                                        title="No capsules here yet".to_string()
                                        hint="Adjust your filters, or be the first to share one.".to_string()
                                    />
                                }
                            >
                                <div class="knowledge-feed__list">
                                    {move || visible.get().into_iter().map(|capsule| {
                                        let capsule_id = capsule.id;
                                        let on_like = Callback::new(move |delta: i64| {
                                            state.update(|s| {
                                                if let Some(list) = &mut s.data {
                                                    if let Some(c) = list.iter_mut().find(|c| c.id == capsule_id) {
                                                        c.like_count = (c.like_count + delta).max(0);
                                                    }
                                                }
                                            });
                                        });
                                        let on_bookmark = Callback::new(move |delta: i64| {
                                            state.update(|s| {
                                                if let Some(list) = &mut s.data {
                                                    if let Some(c) = list.iter_mut().find(|c| c.id == capsule_id) {
                                                        c.bookmark_count = (c.bookmark_count + delta).max(0);
                                                    }
                                                }
                                            });
                                        });
                                        view! {
                                            <CapsuleCard
                                                capsule=capsule
                                                on_like_delta=on_like
                                                on_bookmark_delta=on_bookmark
                                            />
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        }
                    >
                        <ErrorPanel
                            message=state.with(|s| s.error.clone())
                            on_retry=capsules.retry()
                        />
                    </Show>
                }
            >
                <LoadingView message=Some("Loading capsules...".to_string()) />
            </Show>
        </div>
    }
}
