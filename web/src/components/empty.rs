use leptos::prelude::*;

/// Rendered whenever a list legitimately has nothing to show, so filtered-out
/// and genuinely-empty results never look like an error or a blank page.
#[component]
pub fn EmptyState(title: String, hint: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">"🗂"</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__hint">{hint}</p>
        </div>
    }
}
