use leptos::prelude::*;
use leptos::server;
use shared_types::{ApiResponse, MentorProfile, MentorshipRequest};

#[server]
pub async fn list_mentors() -> Result<ApiResponse<Vec<MentorProfile>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("mentors", mock::list_mentors).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn request_mentorship(
    mentor_id: i64,
    student_name: String,
    focus: String,
) -> Result<ApiResponse<MentorshipRequest>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("mentors/{mentor_id}/requests");
        let body = serde_json::json!({
            "student_name": student_name,
            "focus": focus,
        });
        Ok(gateway::post(&path, &body, move || {
            mock::request_mentorship(mentor_id, &student_name, &focus)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn my_mentorship_requests(
    student_name: String,
) -> Result<ApiResponse<Vec<MentorshipRequest>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!(
            "mentorship/requests?student={}",
            urlencoding::encode(&student_name)
        );
        Ok(gateway::get(&path, move || {
            mock::my_mentorship_requests(&student_name)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}
