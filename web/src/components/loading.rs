use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-view">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-view__message">
                {message.unwrap_or_else(|| "Loading...".to_string())}
            </p>
        </div>
    }
}
