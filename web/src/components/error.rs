use leptos::prelude::*;
use thaw::{Button, MessageBar, MessageBarIntent};

/// Inline failure panel with a retry affordance. `on_retry` re-invokes the
/// identical fetch that failed.
#[component]
pub fn ErrorPanel(message: Option<String>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string())}
            </MessageBar>
            <Button on_click=move |_| on_retry.run(())>
                "Try Again"
            </Button>
        </div>
    }
}
