use leptos::prelude::*;
use shared_types::MentorProfile;
use thaw::Button;

#[component]
pub fn MentorCard(mentor: MentorProfile, requested: bool, on_request: Callback<i64>) -> impl IntoView {
    let mentor_id = mentor.id;
    let accepting = mentor.accepting;

    view! {
        <article class="mentor-card">
            <div class="mentor-card__header">
                <div>
                    <h3 class="mentor-card__name">{mentor.name.clone()}</h3>
                    <p class="mentor-card__industry">
                        {format!("{} · Class of {}", mentor.industry, mentor.class_year)}
                    </p>
                </div>
                <div class="mentor-card__rating">
                    {format!("★ {:.1}", mentor.rating)}
                </div>
            </div>

            <p class="mentor-card__headline">{mentor.headline.clone()}</p>

            <div class="mentor-card__skills">
                {mentor.skills.clone().into_iter().map(|skill| view! {
                    <span class="mentor-card__skill">{skill}</span>
                }).collect_view()}
            </div>

            <div class="mentor-card__footer">
                {if accepting {
                    view! {
                        <span class="mentor-card__availability mentor-card__availability--open">
                            "Accepting mentees"
                        </span>
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="mentor-card__availability">
                            "Not accepting right now"
                        </span>
                    }
                        .into_any()
                }}
                <Button
                    on_click=move |_| on_request.run(mentor_id)
                    disabled=Signal::derive(move || requested || !accepting)
                >
                    {if requested { "Request sent" } else { "Request intro" }}
                </Button>
            </div>
        </article>
    }
}
