use std::time::Duration;

use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIntent {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub intent: NoticeIntent,
    pub text: String,
}

/// App-wide transient notifications. Pushed notices dismiss themselves after
/// a few seconds; the stack renders them in the page corner.
#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notices {
    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeIntent::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeIntent::Error, text.into());
    }

    fn push(&self, intent: NoticeIntent, text: String) {
        let mut id = 0;
        self.next_id.update_value(|n| {
            *n += 1;
            id = *n;
        });
        self.items
            .update(|items| items.push(Notice { id, intent, text }));

        let items = self.items;
        set_timeout(
            move || items.update(|list| list.retain(|notice| notice.id != id)),
            Duration::from_secs(4),
        );
    }
}

pub fn provide_notices() -> Notices {
    let notices = Notices {
        items: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(notices);
    notices
}

pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-stack">
            {move || notices.items.get().into_iter().map(|notice| {
                let intent = match notice.intent {
                    NoticeIntent::Success => MessageBarIntent::Success,
                    NoticeIntent::Error => MessageBarIntent::Error,
                };
                view! {
                    <div class="notice-stack__item">
                        <MessageBar intent=intent>
                            {notice.text.clone()}
                        </MessageBar>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
