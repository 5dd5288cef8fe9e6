use leptos::prelude::*;

#[component]
pub fn StatTile(
    title: String,
    value: String,
    caption: String,
    icon: String,
    accent: String,
) -> impl IntoView {
    view! {
        <div class={format!("stat-tile stat-tile--{}", accent)}>
            <div class="stat-tile__header">
                <span class="stat-tile__icon">{icon}</span>
                <span class="stat-tile__title">{title}</span>
            </div>
            <div class="stat-tile__value">{value}</div>
            <div class="stat-tile__caption">{caption}</div>
        </div>
    }
}
