use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::Button;

use crate::components::notifications::use_notices;
use crate::components::upload_row::UploadRow;
use crate::components::{EmptyState, ErrorPanel, LoadingView};
use crate::hooks::fetch::use_fetch;
use crate::hooks::poll::use_polling;
use crate::services::admin::{list_dataset_uploads, start_dataset_upload};
use crate::services::envelope_or_error;
use crate::utils::storage::use_session;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[component]
pub fn AdminUploads() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();
    let navigate = use_navigate();

    let uploads = use_fetch(move || async move { envelope_or_error(list_dataset_uploads().await) });
    let state = uploads.state;

    Effect::new(move |_| uploads.run());

    // Keep progress fresh while anything is still moving through the
    // pipeline; idle queues stop generating traffic.
    use_polling(
        move || {
            let any_active = state.with_untracked(|s| {
                s.data
                    .as_ref()
                    .map(|list| list.iter().any(|upload| upload.status.is_active()))
                    .unwrap_or(false)
            });
            if any_active {
                uploads.run();
            }
        },
        POLL_INTERVAL,
    );

    let file_name = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let submit_upload = move |_| {
        let uploaded_by = session
            .current_user_untracked()
            .map(|user| user.name)
            .unwrap_or_else(|| "Platform admin".to_string());
        let name = file_name.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            let response = envelope_or_error(start_dataset_upload(name, uploaded_by).await);
            if response.success {
                file_name.set(String::new());
                notices.success("Upload queued");
                uploads.run();
            } else {
                notices.error(
                    response
                        .message
                        .unwrap_or_else(|| "Could not start the upload.".to_string()),
                );
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="admin-uploads">
            <div class="admin-uploads__header">
                <button
                    class="admin-back-button"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/admin/dashboard", Default::default())
                    }
                >
                    "← Back to Dashboard"
                </button>
                <h1>"Dataset Uploads"</h1>
                <p>"Queue alumni and employer datasets for ingestion"</p>
            </div>

            <div class="admin-uploads__form">
                <input
                    class="filter-input"
                    type="text"
                    placeholder="dataset file name, e.g. alumni_fall.csv"
                    prop:value=move || file_name.get()
                    on:input=move |ev| file_name.set(event_target_value(&ev))
                />
                <Button
                    on_click=submit_upload
                    disabled=Signal::derive(move || {
                        submitting.get() || file_name.get().trim().is_empty()
                    })
                >
                    "Start upload"
                </Button>
            </div>

            <Show
                when=move || state.with(|s| s.loading && s.data.is_none())
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
                                        title="No uploads yet".to_string()
                                        hint="Queue a dataset above to start an ingestion run.".to_string()
                                    />
                                }
                            >
                                <table class="uploads-table">
                                    <thead>
                                        <tr>
                                            <th>"File"</th>
                                            <th>"Uploaded by"</th>
                                            <th>"Records"</th>
                                            <th>"Started"</th>
                                            <th>"Status"</th>
                                            <th>"Progress"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || state.with(|s| s.data.clone()).unwrap_or_default()
                                            .into_iter().map(|upload| view! {
                                                <UploadRow upload=upload />
                                            }).collect_view()}
                                    </tbody>
                                </table>
                            </Show>
                        }
                    >
                        <ErrorPanel
                            message=state.with(|s| s.error.clone())
                            on_retry=uploads.retry()
                        />
                    </Show>
                }
            >
                <LoadingView message=Some("Loading uploads...".to_string()) />
            </Show>
        </div>
    }
}
