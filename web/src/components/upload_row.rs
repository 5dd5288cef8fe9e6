use leptos::prelude::*;
use shared_types::{DatasetUpload, UploadStatus};

use crate::utils::format::{date_label, format_count, percent_label};

#[component]
pub fn UploadRow(upload: DatasetUpload) -> impl IntoView {
    let percent = upload.progress_percent.clamp(0.0, 100.0);
    let status_class = match upload.status {
        UploadStatus::Complete => "upload-row__status upload-row__status--complete",
        UploadStatus::Failed => "upload-row__status upload-row__status--failed",
        _ => "upload-row__status upload-row__status--active",
    };

    view! {
        <tr class="upload-row">
            <td class="upload-row__file">{upload.file_name.clone()}</td>
            <td>{upload.uploaded_by.clone()}</td>
            <td>{format_count(upload.record_count)}</td>
            <td>{date_label(&upload.started_at)}</td>
            <td>
                <span class=status_class>{upload.status.label()}</span>
                {upload.failure_reason.clone().map(|reason| view! {
                    <p class="upload-row__failure">{reason}</p>
                })}
            </td>
            <td class="upload-row__progress-cell">
                <div class="upload-progress">
                    <div
                        class="upload-progress__fill"
                        style=format!("width: {percent}%")
                    ></div>
                </div>
                <span class="upload-progress__label">{percent_label(percent)}</span>
            </td>
        </tr>
    }
}
