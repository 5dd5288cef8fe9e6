use leptos::prelude::*;
use leptos::server;
use shared_types::{ApiResponse, Capsule};

#[server]
pub async fn list_capsules() -> Result<ApiResponse<Vec<Capsule>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        Ok(gateway::get("capsules", mock::list_capsules).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

/// Fetch a specific set of capsules, used by the saved-bookmarks page with
/// the ids the session store remembers.
#[server]
pub async fn saved_capsules(ids: Vec<i64>) -> Result<ApiResponse<Vec<Capsule>>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let path = format!("capsules?ids={joined}");
        Ok(gateway::get(&path, move || mock::capsules_by_ids(&ids)).await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn create_capsule(
    author: String,
    title: String,
    topic: String,
    body: String,
) -> Result<ApiResponse<Capsule>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let payload = serde_json::json!({
            "author": author,
            "title": title,
            "topic": topic,
            "body": body,
        });
        Ok(gateway::post("capsules", &payload, move || {
            mock::create_capsule(&author, &title, &topic, &body)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn set_capsule_like(
    capsule_id: i64,
    set: bool,
) -> Result<ApiResponse<bool>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("capsules/{capsule_id}/like");
        let body = serde_json::json!({ "set": set });
        Ok(gateway::post(&path, &body, move || {
            mock::set_capsule_like(capsule_id, set)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}

#[server]
pub async fn set_capsule_bookmark(
    capsule_id: i64,
    set: bool,
) -> Result<ApiResponse<bool>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use crate::services::{gateway, mock};
        let path = format!("capsules/{capsule_id}/bookmark");
        let body = serde_json::json!({ "set": set });
        Ok(gateway::post(&path, &body, move || {
            mock::set_capsule_bookmark(capsule_id, set)
        })
        .await)
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(ApiResponse::fail("Not available on the client"))
    }
}
