use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::mentor_card::MentorCard;
use crate::components::notifications::use_notices;
use crate::components::{EmptyState, ErrorPanel, LoadingView};
use crate::hooks::fetch::use_fetch;
use crate::services::envelope_or_error;
use crate::services::mentorship::{list_mentors, my_mentorship_requests, request_mentorship};
use crate::utils::filter::{self, FilterCriteria, SortKey};
use crate::utils::format::date_label;
use crate::utils::storage::use_session;

#[component]
pub fn MentorshipPage() -> impl IntoView {
    let session = use_session();
    let notices = use_notices();

    let mentors = use_fetch(move || async move { envelope_or_error(list_mentors().await) });
    let mentors_state = mentors.state;

    let requests = use_fetch(move || {
        let student = session
            .current_user_untracked()
            .map(|user| user.name)
            .unwrap_or_default();
        async move {
            if student.is_empty() {
                return shared_types::ApiResponse::ok(Vec::new());
            }
            envelope_or_error(my_mentorship_requests(student).await)
        }
    });
    let requests_state = requests.state;

    Effect::new(move |_| mentors.run());
    // Re-load the request history whenever the session user changes.
    Effect::new(move |_| {
        let _ = session.current_user();
        requests.run();
    });

    let search = RwSignal::new(String::new());
    let industry = RwSignal::new("all".to_string());
    let min_rating = RwSignal::new("all".to_string());
    let accepting_only = RwSignal::new(false);
    let focus = RwSignal::new(String::new());
    let request_status = RwSignal::new("all".to_string());

    let visible = Memo::new(move |_| {
        let records = mentors_state.with(|s| s.data.clone()).unwrap_or_default();
        let criteria = FilterCriteria::new()
            .search("search", &search.get())
            .is("industry", &industry.get())
            .at_least("rating", min_rating.get().parse::<f64>().ok())
            .flag("accepting", accepting_only.get().then_some(true));
        filter::apply(&records, &criteria, SortKey::Rating)
    });

    let visible_requests = Memo::new(move |_| {
        let records = requests_state.with(|s| s.data.clone()).unwrap_or_default();
        let criteria = FilterCriteria::new().is("status", &request_status.get());
        filter::apply(&records, &criteria, SortKey::Recent)
    });

    // Mentors with an open or accepted request from this student.
    let engaged_mentors = Memo::new(move |_| {
        requests_state.with(|s| {
            s.data
                .as_ref()
                .map(|list| {
                    list.iter()
                        .filter(|request| request.status != "declined")
                        .map(|request| request.mentor_id)
                        .collect::<Vec<i64>>()
                })
                .unwrap_or_default()
        })
    });

    let handle_request = Callback::new(move |mentor_id: i64| {
        let Some(user) = session.current_user_untracked() else {
            notices.error("Sign in to request an introduction.");
            return;
        };
        let focus_text = {
            let typed = focus.get_untracked();
            if typed.trim().is_empty() {
                "General career advice".to_string()
            } else {
                typed.trim().to_string()
            }
        };
        spawn_local(async move {
            let response =
                envelope_or_error(request_mentorship(mentor_id, user.name, focus_text).await);
            if response.success {
                if let Some(request) = response.data {
                    requests_state.update(|s| {
                        if let Some(list) = &mut s.data {
                            list.push(request);
                        } else {
                            s.data = Some(vec![request]);
                        }
                    });
                }
                notices.success("Introduction requested");
            } else {
                notices.error(
                    response
                        .message
                        .unwrap_or_else(|| "Could not send your request.".to_string()),
                );
            }
        });
    });

    view! {
        <div class="mentorship-page">
            <div class="mentorship-page__header">
                <h1>"Find a Mentor"</h1>
                <p class="mentorship-page__subtitle">
                    "Alumni volunteering time for introductions, reviews and prep"
                </p>
            </div>

            <div class="mentorship-page__filters">
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Search name, industry or skill"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| industry.set(event_target_value(&ev))
                >
                    <option value="all">"All industries"</option>
                    <option value="Software">"Software"</option>
                    <option value="Finance">"Finance"</option>
                    <option value="Design">"Design"</option>
                    <option value="Data">"Data"</option>
                    <option value="Product">"Product"</option>
                </select>
                <select
                    class="filter-select"
                    on:change=move |ev| min_rating.set(event_target_value(&ev))
                >
                    <option value="all">"Any rating"</option>
                    <option value="4.0">"4.0 and up"</option>
                    <option value="4.5">"4.5 and up"</option>
                </select>
                <label class="filter-flag">
                    <input
                        type="checkbox"
                        prop:checked=move || accepting_only.get()
                        on:change=move |ev| accepting_only.set(event_target_checked(&ev))
                    />
                    "Accepting mentees"
                </label>
            </div>

            <div class="mentorship-page__focus">
                <label for="mentorship-focus">"What do you want to focus on?"</label>
                <input
                    id="mentorship-focus"
                    class="filter-input"
                    type="text"
                    placeholder="e.g. Systems design interview prep"
                    prop:value=move || focus.get()
                    on:input=move |ev| focus.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || mentors_state.with(|s| s.loading)
                fallback=move || view! {
                    <Show
                        when=move || mentors_state.with(|s| s.error.is_some())
                        fallback=move || view! {
                            <Show
                                when=move || !visible.get().is_empty()
                                fallback=move || view! {
                                    <EmptyState
                                        title="No mentors match".to_string()
                                        hint="Loosen the rating bar or clear the industry filter.".to_string()
                                    />
                                }
                            >
                                <div class="mentorship-page__grid">
                                    {move || visible.get().into_iter().map(|mentor| {
                                        let already = engaged_mentors.with(|ids| ids.contains(&mentor.id));
                                        view! {
                                            <MentorCard
                                                mentor=mentor
                                                requested=already
                                                on_request=handle_request
                                            />
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        }
                    >
                        <ErrorPanel
                            message=mentors_state.with(|s| s.error.clone())
                            on_retry=mentors.retry()
                        />
                    </Show>
                }
            >
                <LoadingView message=Some("Loading mentors...".to_string()) />
            </Show>

            <Show when=move || session.current_user().is_some()>
                <div class="mentorship-requests">
                    <div class="mentorship-requests__header">
                        <h2>"My Requests"</h2>
                        <select
                            class="filter-select"
                            on:change=move |ev| request_status.set(event_target_value(&ev))
                        >
                            <option value="all">"All statuses"</option>
                            <option value="pending">"Pending"</option>
                            <option value="accepted">"Accepted"</option>
                            <option value="declined">"Declined"</option>
                        </select>
                    </div>

                    <Show
                        when=move || !visible_requests.get().is_empty()
                        fallback=move || view! {
                            <EmptyState
                                title="No requests yet".to_string()
                                hint="Request an introduction above to get started.".to_string()
                            />
                        }
                    >
                        <ul class="mentorship-requests__list">
                            {move || visible_requests.get().into_iter().map(|request| {
                                let status_class = format!(
                                    "request-status request-status--{}",
                                    request.status
                                );
                                view! {
                                    <li class="mentorship-requests__item">
                                        <div>
                                            <span class="mentorship-requests__mentor">
                                                {request.mentor_name.clone()}
                                            </span>
                                            <span class="mentorship-requests__focus">
                                                {request.focus.clone()}
                                            </span>
                                        </div>
                                        <div>
                                            <span class=status_class>{request.status.clone()}</span>
                                            <span class="mentorship-requests__date">
                                                {date_label(&request.created_at)}
                                            </span>
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
