use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::stat_tile::StatTile;
use crate::hooks::fetch::use_fetch;
use crate::hooks::poll::use_polling;
use crate::services::admin::platform_stats;
use crate::services::envelope_or_error;
use crate::utils::format::format_count;

const REFRESH_INTERVAL: Duration = Duration::from_secs(10);

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let navigate = use_navigate();

    let stats = use_fetch(move || async move { envelope_or_error(platform_stats().await) });
    let stats_state = stats.state;

    Effect::new(move |_| stats.run());
    use_polling(move || stats.run(), REFRESH_INTERVAL);

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard__header">
                <h1>"Admin Dashboard"</h1>
                <p>"Platform health and moderation queues"</p>
            </div>

            {move || stats_state.with(|s| s.data.clone()).map(|stats| view! {
                <div class="dashboard__grid">
                    <StatTile
                        title="Members".to_string()
                        value=format_count(stats.total_members)
                        caption="registered accounts".to_string()
                        icon="🎓".to_string()
                        accent="purple".to_string()
                    />
                    <StatTile
                        title="Active jobs".to_string()
                        value=stats.active_jobs.to_string()
                        caption="currently open".to_string()
                        icon="💼".to_string()
                        accent="blue".to_string()
                    />
                    <StatTile
                        title="Moderation queue".to_string()
                        value=stats.pending_moderation.to_string()
                        caption="capsules awaiting review".to_string()
                        icon="🛡️".to_string()
                        accent="orange".to_string()
                    />
                    <StatTile
                        title="Dataset uploads".to_string()
                        value=stats.active_uploads.to_string()
                        caption="currently ingesting".to_string()
                        icon="🗄️".to_string()
                        accent="green".to_string()
                    />
                </div>
            })}

            <div class="admin-dashboard__cards">
                <div
                    class="admin-card"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/admin/uploads", Default::default());
                        }
                    }
                >
                    <div class="admin-card__icon">"🗄️"</div>
                    <h2>"Dataset Uploads"</h2>
                    <p>"Import alumni and employer datasets, watch ingestion progress"</p>
                </div>

                <div
                    class="admin-card"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/admin/moderation", Default::default());
                        }
                    }
                >
                    <div class="admin-card__icon">"🛡️"</div>
                    <h2>"Capsule Moderation"</h2>
                    <p>"Review pending capsules before they reach the feed"</p>
                </div>
            </div>
        </div>
    }
}
