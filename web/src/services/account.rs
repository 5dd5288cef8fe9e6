use leptos::prelude::*;
use leptos::server;
use shared_types::{ApiResponse, SkillNode, StoredUser, StudentStats};

#[server]
pub async fn login(
    email: String,
    password: String,
) -> Result<ApiResponse<StoredUser>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        Ok(gateway::post("auth/login", &body, move || {
            mock::login(&email, &password)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

/// Registers a new account. The returned email stays parked client-side as
/// the pending-verification address until the user confirms it.
#[server]
pub async fn signup(
    name: String,
    email: String,
    password: String,
) -> Result<ApiResponse<String>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let body = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        });
        Ok(gateway::post("auth/signup", &body, move || {
            mock::signup(&name, &email, &password)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server(StudentStatsFn)]
pub async fn student_stats(
    student_name: String,
) -> Result<ApiResponse<StudentStats>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!(
            "students/{}/stats",
            urlencoding::encode(&student_name)
        );
        Ok(gateway::get(&path, move || mock::student_stats(&student_name)).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn skill_graph() -> Result<ApiResponse<Vec<SkillNode>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("skills/graph", mock::skill_graph).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}
