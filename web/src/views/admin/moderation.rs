use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared_types::Capsule;
use thaw::Button;

use crate::components::notifications::use_notices;
use crate::components::{EmptyState, ErrorPanel, LoadingView};
use crate::hooks::fetch::use_fetch;
use crate::services::admin::{moderate_capsule, pending_capsules};
use crate::services::envelope_or_error;
use crate::utils::format::date_label;

#[component]
pub fn AdminModeration() -> impl IntoView {
    let notices = use_notices();
    let navigate = use_navigate();

    let queue = use_fetch(move || async move { envelope_or_error(pending_capsules().await) });
    let state = queue.state;

    Effect::new(move |_| queue.run());

    // The reviewed card leaves the queue immediately; if the backend rejects
    // the decision the card is put back where it was.
    let decide = Callback::new(move |(capsule_id, approve): (i64, bool)| {
        let mut removed: Option<(usize, Capsule)> = None;
        state.update(|s| {
            if let Some(list) = &mut s.data {
                if let Some(position) = list.iter().position(|capsule| capsule.id == capsule_id) {
                    removed = Some((position, list.remove(position)));
                }
            }
        });

        spawn_local(async move {
            let response = envelope_or_error(moderate_capsule(capsule_id, approve).await);
            if response.success {
                notices.success(if approve {
                    "Capsule published"
                } else {
                    "Capsule rejected"
                });
            } else {
                if let Some((position, capsule)) = removed {
                    state.update(|s| {
                        if let Some(list) = &mut s.data {
                            let position = position.min(list.len());
                            list.insert(position, capsule);
                        }
                    });
                }
                notices.error(
                    response
                        .message
                        .unwrap_or_else(|| "Could not record the decision.".to_string()),
                );
            }
        });
    });

    view! {
        <div class="admin-moderation">
            <div class="admin-moderation__header">
                <button
                    class="admin-back-button"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/admin/dashboard", Default::default())
                    }
                >
                    "← Back to Dashboard"
                </button>
                <h1>"Capsule Moderation"</h1>
                <p>
                    "Pending capsules ("
                    {move || state.with(|s| s.data.as_ref().map(|list| list.len()).unwrap_or(0))}
                    " remaining)"
                </p>
            </div>

            <Show
                when=move || state.with(|s| s.loading)
                fallback=move || view! {
                    <Show
                        when=move || state.with(|s| s.error.is_some())
                        fallback=move || view! {
                            <Show
                                when=move || state.with(|s| {
                                    s.data.as_ref().map(|list| !list.is_empty()).unwrap_or(false)
                                })
                                fallback=move || view! {
                                    <EmptyState
                                        title="Queue is clear".to_string()
                                        hint="New submissions land here before they reach the feed.".to_string()
                                    />
                                }
                            >
                                <div class="admin-moderation__list">
                                    {move || state.with(|s| s.data.clone()).unwrap_or_default()
                                        .into_iter().map(|capsule| {
                                            let capsule_id = capsule.id;
                                            view! {
                                                <article class="moderation-card">
                                                    <div class="moderation-card__meta">
                                                        <span class="moderation-card__topic">{capsule.topic.clone()}</span>
                                                        <span class="moderation-card__author">{capsule.author.clone()}</span>
                                                        <span class="moderation-card__date">
                                                            {date_label(&capsule.created_at)}
                                                        </span>
                                                    </div>
                                                    <h3>{capsule.title.clone()}</h3>
                                                    <p class="moderation-card__body">{capsule.body.clone()}</p>
                                                    <div class="moderation-card__actions">
                                                        <Button on_click=move |_| decide.run((capsule_id, true))>
                                                            "Approve"
                                                        </Button>
                                                        <Button on_click=move |_| decide.run((capsule_id, false))>
                                                            "Reject"
                                                        </Button>
                                                    </div>
                                                </article>
                                            }
                                        }).collect_view()}
                                </div>
                            </Show>
                        }
                    >
                        <ErrorPanel
                            message=state.with(|s| s.error.clone())
                            on_retry=queue.retry()
                        />
                    </Show>
                }
            >
                <LoadingView message=Some("Loading the moderation queue...".to_string()) />
            </Show>
        </div>
    }
}
