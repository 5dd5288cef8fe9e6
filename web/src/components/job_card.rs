use leptos::prelude::*;
use shared_types::JobPosting;
use thaw::Button;

use crate::utils::format::date_label;

#[component]
pub fn JobCard(job: JobPosting, applied: bool, on_apply: Callback<i64>) -> impl IntoView {
    let job_id = job.id;

    view! {
        <article class="job-card">
            <div class="job-card__header">
                <div>
                    <h3 class="job-card__title">{job.title.clone()}</h3>
                    <p class="job-card__company">
                        {format!("{} · {}", job.company, job.location)}
                    </p>
                </div>
                <div class="job-card__badges">
                    <span class="job-card__badge">{job.category.clone()}</span>
                    {job.remote.then(|| view! {
                        <span class="job-card__badge job-card__badge--remote">"Remote"</span>
                    })}
                </div>
            </div>

            <p class="job-card__description">{job.description.clone()}</p>

            <div class="job-card__footer">
                <span class="job-card__posted">{format!("Posted {}", date_label(&job.posted_at))}</span>
                <span class="job-card__applicants">
                    {format!("{} applicants", job.applicant_count)}
                </span>
                {job.salary_range.clone().map(|salary| view! {
                    <span class="job-card__salary">{salary}</span>
                })}
                <Button
                    on_click=move |_| on_apply.run(job_id)
                    disabled=Signal::derive(move || applied)
                >
                    {if applied { "Applied" } else { "Apply" }}
                </Button>
            </div>
        </article>
    }
}
