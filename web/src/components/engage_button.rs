use leptos::prelude::*;

use crate::components::notifications::use_notices;
use crate::hooks::optimistic::{optimistic_toggle, EngagementKind};
use crate::services::envelope_or_error;
use crate::services::knowledge::{set_capsule_bookmark, set_capsule_like};
use crate::utils::storage::use_session;

/// Like/bookmark toggle for one capsule. The flip is applied optimistically;
/// `on_delta` receives the ±1 counter adjustment (and its reversal if the
/// backend rejects the change).
#[component]
pub fn EngageButton(
    capsule_id: i64,
    kind: EngagementKind,
    count: i64,
    on_delta: Callback<i64>,
) -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let ledger = session.engagement(kind);
    let active = Signal::derive(move || ledger.with(|l| l.contains(capsule_id)));

    let handle_click = move |_| {
        if session.current_user_untracked().is_none() {
            notices.error("Sign in to react to capsules.");
            return;
        }
        optimistic_toggle(
            capsule_id,
            ledger,
            move |delta| on_delta.run(delta),
            move || session.persist_engagement(kind),
            move |now_set| async move {
                let result = match kind {
                    EngagementKind::Like => set_capsule_like(capsule_id, now_set).await,
                    EngagementKind::Bookmark => set_capsule_bookmark(capsule_id, now_set).await,
                };
                envelope_or_error(result)
            },
            notices,
            kind.applied_label(),
            kind.removed_label(),
        );
    };

    let icon = match kind {
        EngagementKind::Like => "♥",
        EngagementKind::Bookmark => "🔖",
    };

    view! {
        <button
            class=move || if active.get() {
                "engage-button engage-button--active"
            } else {
                "engage-button"
            }
            on:click=handle_click
        >
            <span class="engage-button__icon">{icon}</span>
            <span class="engage-button__count">{count}</span>
        </button>
    }
}
